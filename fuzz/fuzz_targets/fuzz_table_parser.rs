#![no_main]

use libfuzzer_sys::fuzz_target;
use outplot::stream::LineStreamer;
use outplot::table::parse_streamer;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either parse or fail with a structural error,
    // never panic. The first byte picks the read size so chunk boundaries
    // land in different places.
    let chunk_size = data.first().map(|b| *b as usize + 1).unwrap_or(1);
    let streamer = LineStreamer::with_chunk_size(Cursor::new(data), chunk_size);

    if let Ok((table, _stats)) = parse_streamer(streamer, "fuzz") {
        for name in &table.headers {
            let column = table.column(name).expect("header without column");
            assert_eq!(column.len(), table.time.len());
        }
    }
});
