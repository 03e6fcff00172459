use super::*;

mod asset;
mod mint_shares;
mod percentage;

pub use self::{asset::*, mint_shares::*, percentage::*};
