// Crate-internal.
// ---

pub(crate) mod demo {
    pub(crate) mod demo_api;
}
pub(crate) mod exchange_rates {
    pub(crate) mod fx_exchange_rates;
}

// Public exports.
// ---

pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported under `ext` in the root of the
    // crate.

    pub mod demo {
        pub use crate::impl_ext::demo::demo_api::*;
    }

    pub mod exchange_rates {
        pub use crate::impl_ext::exchange_rates::fx_exchange_rates::*;
    }
}
