pub mod checksum;

pub use checksum::CHECKSUM_LEN;
