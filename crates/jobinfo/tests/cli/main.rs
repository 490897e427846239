#![cfg(unix)]

mod helpers;
mod test_input;
mod test_qstat;
