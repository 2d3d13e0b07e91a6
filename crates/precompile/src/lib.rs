//! # eip2537-precompile
//!
//! Implementation of the [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537) precompiled
//! contracts for operations over the BLS12-381 curve.
//!
//! Every precompile takes a single byte buffer and returns either the encoded result or one
//! of the [`PrecompileError`] variants. Curve arithmetic is delegated to `blst` or, with the
//! `blst` feature disabled, to the arkworks stack.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bls12_381;
pub mod bls12_381_const;
pub mod id;
pub mod interface;

pub use id::PrecompileId;
pub use interface::*;
pub use primitives::{Address, Bytes};

use once_cell::race::OnceBox;
use std::{boxed::Box, collections::BTreeMap};
use tracing::{debug, trace};

/// A precompile bound to its identifier and address.
#[derive(Clone, Copy, Debug)]
pub struct Precompile {
    /// Unique identifier.
    id: PrecompileId,
    /// Address the precompile is installed at.
    address: Address,
    /// Precompile implementation.
    fn_: PrecompileFn,
}

impl Precompile {
    /// Create new precompile.
    pub const fn new(id: PrecompileId, address: u64, fn_: PrecompileFn) -> Self {
        Self {
            id,
            address: u64_to_address(address),
            fn_,
        }
    }

    /// Returns reference to precompile identifier.
    #[inline]
    pub const fn id(&self) -> &PrecompileId {
        &self.id
    }

    /// Returns reference to address.
    #[inline]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the precompile function.
    #[inline]
    pub const fn precompile(&self) -> &PrecompileFn {
        &self.fn_
    }

    /// Runs the precompile on the given input.
    pub fn execute(&self, input: &[u8]) -> PrecompileResult {
        trace!(target: "bls12_381", precompile = %self.id, input_len = input.len(), "executing precompile");
        let result = (self.fn_)(input);
        if let Err(err) = &result {
            debug!(target: "bls12_381", precompile = %self.id, %err, "precompile rejected input");
        }
        result
    }
}

/// Set of precompiles keyed by address, iterated in address order.
#[derive(Clone, Default, Debug)]
pub struct Precompiles {
    inner: BTreeMap<Address, Precompile>,
}

impl Precompiles {
    /// Returns the EIP-2537 precompiles.
    pub fn eip2537() -> &'static Self {
        static INSTANCE: OnceBox<Precompiles> = OnceBox::new();
        INSTANCE.get_or_init(|| {
            let mut precompiles = Self::default();
            precompiles.extend(bls12_381::precompiles());
            Box::new(precompiles)
        })
    }

    /// Returns the precompile for the given address.
    #[inline]
    pub fn get(&self, address: &Address) -> Option<&Precompile> {
        self.inner.get(address)
    }

    /// Is the given address a precompile.
    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        self.inner.contains_key(address)
    }

    /// Returns an iterator over the precompiles addresses.
    #[inline]
    pub fn addresses(&self) -> impl ExactSizeIterator<Item = &Address> {
        self.inner.keys()
    }

    /// Returns an iterator over the precompiles.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Precompile> {
        self.inner.values()
    }

    /// Runs the precompile installed at `address`, if any.
    pub fn run(&self, address: &Address, input: &[u8]) -> Option<PrecompileResult> {
        self.get(address).map(|precompile| precompile.execute(input))
    }

    /// Is the precompiles list empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of precompiles.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Extends the precompiles with the given precompiles.
    ///
    /// Other precompiles with overwrite existing precompiles.
    #[inline]
    pub fn extend(&mut self, other: impl IntoIterator<Item = Precompile>) {
        self.inner
            .extend(other.into_iter().map(|p| (*p.address(), p)));
    }
}

/// Const function for making an address from a number.
///
/// Used as a convenience for specifying the addresses of the various precompiles.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}
