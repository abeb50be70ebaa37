#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

pub fn sc() -> Command {
    cargo_bin_cmd!("schedcache")
}

/// Create a unique scratch file path inside the system temp dir and remove any leftover
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_schedcache.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// A local instant at noon, away from any DST edge
pub fn local_noon(year: i32, month: u32, day: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("unambiguous local time")
}

/// Serve exactly one HTTP response on a random local port and return the URL.
/// The background thread drains the request head before answering, then the
/// connection is closed.
pub fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut head = Vec::new();
            let mut buf = [0u8; 4096];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "{}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).ok();
        }
    });

    format!("http://{}/Schedule", addr)
}

/// A URL nothing listens on, for runs that must never touch the network
pub fn dead_url() -> String {
    "http://127.0.0.1:9/Schedule".to_string()
}

/// Build a schedule page carrying `tables` week tables. Indices listed in
/// `malformed` get a single header cell. Table 0 mimics the orientation
/// table: an oversized header plus one preamble row before the week rows.
pub fn schedule_page(tables: usize, malformed: &[usize]) -> String {
    let mut page = String::from(
        "<html><head><title>Course Schedule</title></head><body>\n<h1>Schedule</h1>\n",
    );
    for i in 0..tables {
        page.push_str("<table class=\"foswikiTable\">\n");
        if i == 0 {
            page.push_str("  <tr><th>Orientation</th><th>Info</th><th>Extra</th></tr>\n");
            page.push_str("  <tr><td>Orientation info, read the course guide first</td></tr>\n");
            page.push_str(
                "  <tr><td>1</td><td>Mon, Feb 27</td><td>Welcome</td>\
                 <td><a href=\"/intro.pdf\">intro</a></td><td>none</td></tr>\n",
            );
            page.push_str("  <tr><td>2</td><td>Wed, Mar 1</td><td>Unix basics</td><td></td><td></td></tr>\n");
        } else if malformed.contains(&i) {
            page.push_str("  <tr><th>Broken</th></tr>\n");
            page.push_str("  <tr><td>half a row</td></tr>\n");
        } else {
            page.push_str(&format!(
                "  <tr><th>Week {}</th><th>Schedule</th></tr>\n",
                i + 1
            ));
            page.push_str(&format!(
                "  <tr><td>1</td><td>Mon</td><td>Lecture {}</td>\
                 <td><a href=\"/w{}.pdf\">slides</a></td><td>hw due</td></tr>\n",
                i + 1,
                i + 1
            ));
            page.push_str(&format!(
                "  <tr><td>2</td><td>Wed</td><td>Lab {}</td><td></td><td></td></tr>\n",
                i + 1
            ));
        }
        page.push_str("</table>\n");
    }
    page.push_str("</body></html>\n");
    page
}
