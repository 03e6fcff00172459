//! Mocks of contract entrypoints for `TestHost`. Dependent crates enable the
//! `test-helpers` feature from their dev-dependencies.
#[cfg(feature = "test-helpers")]
pub use inner::*;

#[cfg(feature = "test-helpers")]
mod inner {
    use concordium_std::test_infrastructure::MockFn;
    use concordium_std::*;

    pub fn parse_and_map_mock<D: Deserial, T: Serial, S>(
        f: impl Fn(&D) -> Option<T> + 'static,
    ) -> MockFn<S> {
        MockFn::new(move |parameter, _, _, _state| {
            let value =
                D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
            f(&value)
                .map(|r| (false, Some(r)))
                .ok_or(CallContractError::Trap)
        })
    }

    /// Mock handing every parsed parameter to `record`, e.g. to collect the
    /// transfers a contract made.
    pub fn parse_and_record_mock<D: Deserial, S>(
        record: impl Fn(D) + 'static,
        return_value: impl Clone + Serial + 'static,
    ) -> MockFn<S> {
        MockFn::new(move |parameter, _, _, _state| {
            let value =
                D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
            record(value);
            Ok((false, Some(return_value.clone())))
        })
    }

    pub fn failing_mock<S>() -> MockFn<S> {
        MockFn::new(|_, _, _, _state| Err::<(bool, Option<()>), _>(CallContractError::Trap))
    }
}
