#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod board;
pub mod error;
pub use error::*;
pub mod fimc;
pub use fimc::*;
#[cfg(any(feature = "hosted", test))]
pub mod hosted;
pub mod regs;
pub mod susres;
pub mod utra;

pub use fimc_api as api;

/// Busy or sleeping wait, whichever the environment offers.
pub fn delay_ms(ms: u32) {
    #[cfg(any(feature = "std", test))]
    std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    #[cfg(not(any(feature = "std", test)))]
    for _ in 0..(ms as u64) * board::SPINS_PER_MS {
        core::hint::spin_loop();
    }
}
