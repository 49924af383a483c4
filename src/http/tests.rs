use super::*;
use crate::args::ProbeArgs;
use crate::metrics::ProbeFailure;
use clap::Parser;
use reqwest::Url;
use std::future::Future;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

fn probe_args(extra: &[&str]) -> Result<ProbeArgs, String> {
    let mut argv = vec!["latprobe"];
    argv.extend_from_slice(extra);
    ProbeArgs::try_parse_from(argv).map_err(|err| format!("parse failed: {}", err))
}

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

/// Serves `connections` requests with a fixed status line, then exits.
fn spawn_status_server(status_line: &'static str, connections: usize) -> Result<Url, String> {
    let listener =
        TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("addr failed: {}", err))?;
    thread::spawn(move || {
        for stream in listener.incoming().take(connections).flatten() {
            respond(stream, status_line);
        }
    });
    Url::parse(&format!("http://{}/probe", addr)).map_err(|err| format!("url failed: {}", err))
}

fn respond(mut stream: TcpStream, status_line: &str) {
    let mut buffer = [0u8; 1024];
    if stream.read(&mut buffer).is_err() {
        return;
    }
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status_line
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    drop(stream.flush());
    drop(stream.shutdown(Shutdown::Both));
}

#[test]
fn get_reports_ok_status() -> Result<(), String> {
    run_async_test(async {
        let url = spawn_status_server("200 OK", 1)?;
        let transport = HttpTransport::from_args(&probe_args(&[])?).map_err(|err| err.to_string())?;
        match transport.get(&url).await {
            Ok(200) => Ok(()),
            other => Err(format!("Expected Ok(200), got {:?}", other)),
        }
    })
}

#[test]
fn get_reports_error_status_as_exchange() -> Result<(), String> {
    run_async_test(async {
        let url = spawn_status_server("401 Unauthorized", 1)?;
        let transport = HttpTransport::from_args(&probe_args(&[])?).map_err(|err| err.to_string())?;
        match transport.get(&url).await {
            Ok(401) => Ok(()),
            other => Err(format!("Expected Ok(401), got {:?}", other)),
        }
    })
}

#[test]
fn refused_connection_is_transport_failure() -> Result<(), String> {
    run_async_test(async {
        let listener =
            TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("addr failed: {}", err))?;
        drop(listener);
        let url = Url::parse(&format!("http://{}/", addr))
            .map_err(|err| format!("url failed: {}", err))?;

        let transport = HttpTransport::from_args(&probe_args(&[])?).map_err(|err| err.to_string())?;
        match transport.get(&url).await {
            Err(ProbeFailure::Transport { .. }) => Ok(()),
            other => Err(format!("Expected transport failure, got {:?}", other)),
        }
    })
}

#[test]
fn silent_server_times_out() -> Result<(), String> {
    run_async_test(async {
        let listener =
            TcpListener::bind("127.0.0.1:0").map_err(|err| format!("bind failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("addr failed: {}", err))?;
        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(2));
                drop(stream);
            }
        });
        let url = Url::parse(&format!("http://{}/", addr))
            .map_err(|err| format!("url failed: {}", err))?;

        let transport = HttpTransport::from_args(&probe_args(&["--timeout", "200ms"])?)
            .map_err(|err| err.to_string())?;
        match transport.get(&url).await {
            Err(ProbeFailure::Timeout) => Ok(()),
            other => Err(format!("Expected timeout, got {:?}", other)),
        }
    })
}
