use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let stored_admin = storage::get_admin(env);
    if *caller != stored_admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
