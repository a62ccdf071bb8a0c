pub mod types;
pub mod window;
pub mod design;
pub mod filter;
pub mod error;

pub use types::*;
pub use window::{bessel_i0, kaiser_beta, kaiser_window};
pub use design::{compute_order_and_beta, design, design_taps, MAX_TAPS};
pub use filter::{apply_filter, kaiser_filter, kaiser_filter_batch, magnitude_response};
pub use error::{FirError, Result};
