// Identity documents accepted by the portal

pub mod aadhaar;

pub use aadhaar::Aadhaar;
