use rand::{distributions::uniform::SampleUniform, thread_rng, Rng};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::*;

/// Get EPOCH timestamp in milliseconds
pub fn get_epoch_ms() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_millis() as u64,
        Err(_) => panic!("SystemTime before UNIX EPOCH!"),
    }
}

/// Generate a numeric login OTP with no leading zero
pub fn generate_otp() -> String {
    let low = 10u32.pow(OTP_LENGTH - 1);
    let high = 10u32.pow(OTP_LENGTH);
    get_random_num(low, high).to_string()
}

/// Generate a random number in a given range
/// panics if the lower bound is greater than the higher bound
pub fn get_random_num<T>(low: T, high: T) -> T
where
    T: PartialEq + PartialOrd + SampleUniform,
{
    assert!(low < high);
    let mut rng = thread_rng();
    rng.gen_range(low..high)
}
