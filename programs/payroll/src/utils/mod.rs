pub mod vesting;
