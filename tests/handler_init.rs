use std::{
    io::{self, Write},
    sync::Arc,
};

use lazy_regex::regex;
use log::LevelFilter;
use parking_lot::Mutex;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// A global logger can be set once per process, so everything lives in one test.
#[test]
fn test_init_installs_global_logger() {
    let buffer = SharedBuffer::default();

    debugfmt::handler::init(buffer.clone(), LevelFilter::Debug).unwrap();
    assert!(debugfmt::handler::init(Vec::new(), LevelFilter::Info).is_err());

    log::info!(address = "http://localhost:3000", foo = "bar"; "hello");
    log::trace!("filtered out");
    log::warn!("holy guacamole");
    log::logger().flush();

    let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
    let output = regex!(r"\x1b\[[0-9;]*m").replace_all(&output, "");
    let lines = output.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 2, "unexpected output: {output:?}");
    assert!(regex!(r"^\d{2}:\d{2}:\d{2}  INFO hello: address=http://localhost:3000 foo=bar $").is_match(lines[0]));
    assert!(regex!(r"^\d{2}:\d{2}:\d{2}  WARN holy guacamole$").is_match(lines[1]));
}
