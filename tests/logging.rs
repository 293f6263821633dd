use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use maybe::{decode_str, encode, encode_to_string, just, nothing};

struct Recorder {
    lines: Mutex<Vec<String>>,
}

impl Log for Recorder {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    lines: Mutex::new(Vec::new()),
};

fn take_lines() -> Vec<String> {
    std::mem::take(&mut *RECORDER.lines.lock().unwrap())
}

// One test, so the global logger is only installed once per binary
#[test]
fn codec_boundaries_are_traced() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    encode(&just(1u8)).unwrap();
    assert_eq!(
        take_lines(),
        [format!("{} encoding present Maybe<u8>", Level::Trace)]
    );

    encode_to_string(&nothing::<u8>()).unwrap();
    assert_eq!(
        take_lines(),
        [format!("{} encoding absent Maybe<u8>", Level::Trace)]
    );

    decode_str::<u8>("\"x\"").unwrap_err();
    let lines = take_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("TRACE decoding Maybe<u8>"));
    assert!(lines[1].starts_with("DEBUG could not decode `Maybe<u8>`"));
}
