mod common;

use common::RecordingHandler;
use statuslens::launcher::*;

const URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404";

#[test]
fn test_primary_success_skips_fallback() {
    let primary = RecordingHandler::ok("firefox");
    let fallback = RecordingHandler::ok("system");
    let opener = FallbackOpener::new(Box::new(primary.clone()), Box::new(fallback.clone()));

    opener.open(URL).unwrap();
    assert_eq!(primary.opened(), vec![URL.to_string()]);
    assert!(fallback.opened().is_empty());
}

#[test]
fn test_no_handler_falls_back_to_system_open() {
    let primary = RecordingHandler::no_handler("firefox");
    let fallback = RecordingHandler::ok("system");
    let opener = FallbackOpener::new(Box::new(primary.clone()), Box::new(fallback.clone()));

    opener.open(URL).unwrap();
    assert_eq!(primary.opened().len(), 1);
    assert_eq!(fallback.opened(), vec![URL.to_string()]);
}

#[test]
fn test_other_failures_do_not_fall_back() {
    let primary = RecordingHandler::failing("firefox");
    let fallback = RecordingHandler::ok("system");
    let opener = FallbackOpener::new(Box::new(primary.clone()), Box::new(fallback.clone()));

    let err = opener.open(URL).unwrap_err();
    assert_eq!(err, LaunchError::Failed("crashed".to_string()));
    assert!(fallback.opened().is_empty());
}

#[test]
fn test_both_steps_failing_reports_fallback_error() {
    let primary = RecordingHandler::no_handler("firefox");
    let fallback = RecordingHandler::failing("system");
    let opener = FallbackOpener::new(Box::new(primary), Box::new(fallback));

    assert!(matches!(opener.open(URL), Err(LaunchError::Failed(_))));
}

#[test]
fn test_missing_browser_executable_is_no_handler() {
    let handler = BrowserHandler::new(Some("statuslens-no-such-browser-binary".to_string()));
    match handler.open(URL) {
        Err(LaunchError::NoHandler(reason)) => assert!(reason.contains("not found")),
        other => panic!("expected NoHandler, got {:?}", other),
    }
}

#[test]
fn test_opener_name_is_primary_name() {
    let opener = FallbackOpener::new(
        Box::new(RecordingHandler::ok("firefox")),
        Box::new(RecordingHandler::ok("system")),
    );
    assert_eq!(opener.name(), "firefox");
}

#[cfg(target_os = "linux")]
fn zombie_children() -> usize {
    let me = std::process::id().to_string();
    std::fs::read_dir("/proc")
        .unwrap()
        .filter_map(|e| std::fs::read_to_string(e.ok()?.path().join("stat")).ok())
        .filter(|stat| {
            // "pid (comm) state ppid ..."; comm may contain spaces.
            let rest = match stat.rfind(')') {
                Some(i) => &stat[i + 1..],
                None => return false,
            };
            let mut fields = rest.split_whitespace();
            fields.next() == Some("Z") && fields.next() == Some(me.as_str())
        })
        .count()
}

#[cfg(target_os = "linux")]
#[test]
fn test_launched_browsers_are_reaped() {
    let handler = BrowserHandler::new(Some("true".to_string()));
    for _ in 0..3 {
        handler.open(URL).unwrap();
    }

    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    let mut zombies = zombie_children();
    while zombies > 0 && std::time::Instant::now() < deadline {
        std::thread::sleep(std::time::Duration::from_millis(20));
        zombies = zombie_children();
    }
    assert_eq!(zombies, 0);
}

#[cfg(unix)]
#[test]
fn test_open_does_not_wait_for_browser_exit() {
    // The URL is passed as the only argument, so this runs `sleep 3`.
    let handler = BrowserHandler::new(Some("sleep".to_string()));
    let started = std::time::Instant::now();
    handler.open("3").unwrap();
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}
