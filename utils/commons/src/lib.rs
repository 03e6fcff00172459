//! It exposes all common structs, types and host extensions shared by the
//! GALL sale contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{
    calculations::*, cis2_client::*, constants::*, errors::*, structs::*, types::*,
};
use concordium_cis2::*;
use concordium_std::*;

pub mod test;

mod calculations;
mod cis2_client;
mod constants;
mod errors;
mod structs;
mod types;
