use std::env;

use debugfmt::{Level, LogRecord, Renderer};
use lazy_regex::regex;
use time_macros::datetime;

fn plain(bytes: &[u8]) -> String {
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    regex!(r"\x1b\[[0-9;]*m").replace_all(&text, "").into_owned()
}

// Only test in this binary: it owns the process environment.
#[test]
fn test_render_shows_local_time_of_each_timestamp() {
    // SAFETY: no other thread reads or writes the environment while this test runs.
    unsafe { env::set_var("TZ", "CET-1CEST,M3.5.0,M10.5.0/3") };

    let renderer = Renderer::new(Vec::new());
    std::thread::scope(|scope| {
        scope.spawn(|| {
            let record = LogRecord::new(Level::Info, "winter").at(datetime!(2025-01-15 12:00:00 UTC));
            renderer.render(&record).unwrap();
        });
    });
    renderer
        .render(&LogRecord::new(Level::Info, "summer").at(datetime!(2025-07-15 12:00:00 UTC)))
        .unwrap();
    renderer
        .render(&LogRecord::new(Level::Warn, "midnight").at(datetime!(2025-03-01 23:30:05 UTC)))
        .unwrap();

    assert_eq!(
        plain(&renderer.into_inner()),
        "13:00:00  INFO winter\n\
         14:00:00  INFO summer\n\
         00:30:05  WARN midnight\n"
    );
}
