//! GALL NFT sale contract using the Concordium Token Standard CIS2.
//!
//! # Description
//! The contract sells lots of semi-fungible tokens, each lot identified by a
//! token ID. Lots are priced in an external CIS-2 payment token. Every mint
//! also airdrops an external CIS-2 reward token to the buyer out of a reserve
//! held by this contract.
//!
//! A fixed royalty share of every sale is forwarded to the royalty wallet,
//! the rest is kept in the treasury until the contract owner withdraws it.
//! Lots without an extra price set by the owner can only be minted up to
//! `MAX_MINT_WITHOUT_EXTRA_INFO` tokens.
//!
//! Buyers approve the sale by making this contract an operator of theirs in
//! the payment token contract.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
//!
//! As follows from the CIS2 standard, the contract has a `transfer`
//! function for transferring an amount of a specific token type from one
//! address to another address. An address can enable and disable one or more
//! addresses as operators. An operator of some address is allowed to transfer
//! any tokens owned by this address.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
use crate::{constants::*, events::*, helper::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod events;
mod helper;
mod impls;
mod structs;
