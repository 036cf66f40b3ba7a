//! Items referenced by code that `#[derive(Codable)]` generates.

pub use alloc::boxed::Box;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::info::Typed;
    use crate::{CodecError, CodecRegistry};

    /// A record registration submitted by `#[codec(auto_register)]`.
    pub struct __AutoRegisterFunc(pub fn(&CodecRegistry) -> Result<(), CodecError>);

    inventory::collect!(__AutoRegisterFunc);

    pub fn __register<T: Typed>(registry: &CodecRegistry) -> Result<(), CodecError> {
        registry.register_record::<T>()
    }

    /// Runs every submitted registration, stopping at the first failure.
    pub(crate) fn __register_records(registry: &CodecRegistry) -> Result<usize, CodecError> {
        let mut count = 0;
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry)?;
            count += 1;
        }
        Ok(count)
    }
}
