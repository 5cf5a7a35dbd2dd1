#![no_main]

use imginfo::{FeedOptions, Probe};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&chunk, data)) = data.split_first() else {
        return;
    };
    let options = FeedOptions::default()
        .with_chunk_size(usize::from(chunk).max(1))
        .unwrap();

    // Feeding in chunks must agree with the single-shot answer.
    match imginfo::get_info_from_source(data, &options) {
        Ok(decision) => {
            let prefix = &data[..decision.consumed];
            assert_eq!(imginfo::get_info(prefix).verdict(), decision.verdict);
            assert_eq!(imginfo::get_info(data).valid(), decision.value);
        }
        Err(_) => assert_eq!(imginfo::get_info(data), Probe::NeedMoreData),
    }
});
