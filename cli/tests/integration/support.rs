//! Loopback HTTP server and a stand-in Python interpreter for end-to-end runs.

#![allow(clippy::expect_used, dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Serves fixed bodies by request path on an ephemeral loopback port.
///
/// The accept loop runs on a detached thread for the rest of the test process.
pub struct StaticServer {
    base: String,
}

impl StaticServer {
    pub fn start(routes: Vec<(&'static str, Vec<u8>)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let port = listener.local_addr().expect("local addr").port();
        let routes: HashMap<&'static str, Vec<u8>> = routes.into_iter().collect();
        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                serve(stream, &routes);
            }
        });
        Self {
            base: format!("http://127.0.0.1:{port}"),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

fn serve(mut stream: TcpStream, routes: &HashMap<&'static str, Vec<u8>>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" => break,
            Ok(_) => {}
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = match routes.get(path) {
        Some(body) => ("200 OK", body.as_slice()),
        None => ("404 Not Found", b"not found".as_slice()),
    };
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

/// Gzip-compressed tarball holding `virtualenv-1.11.6/virtualenv.py`.
pub fn virtualenv_archive() -> Vec<u8> {
    let content = b"# virtualenv stand-in\n";
    let encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);
    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    builder
        .append_data(
            &mut header,
            "virtualenv-1.11.6/virtualenv.py",
            content.as_slice(),
        )
        .expect("append entry");
    builder
        .into_inner()
        .expect("finish tar")
        .finish()
        .expect("finish gzip")
}

/// Shell script standing in for a Python interpreter.
///
/// - `-c ...` fails, so virtualenv is never "already installed".
/// - `.../virtualenv.py ... <target>` recreates `<target>/bin/python` as a
///   copy of itself, dropping whatever was in `<target>` before.
/// - `.../bootstrap.py` exits with `$STUB_BOOTSTRAP_EXIT` when set, otherwise
///   writes a `bin/buildout` that touches `buildout-ran`.
const STUB_PYTHON: &str = r#"#!/bin/sh
case "$1" in
  -c)
    exit 1
    ;;
  *virtualenv.py)
    for arg in "$@"; do target="$arg"; done
    rm -rf "$target"
    mkdir -p "$target/bin"
    cp "$0" "$target/bin/python"
    chmod 755 "$target/bin/python"
    exit 0
    ;;
  *bootstrap.py)
    if [ -n "$STUB_BOOTSTRAP_EXIT" ]; then
      exit "$STUB_BOOTSTRAP_EXIT"
    fi
    mkdir -p bin
    printf '#!/bin/sh\ntouch buildout-ran\n' > bin/buildout
    chmod 755 bin/buildout
    exit 0
    ;;
esac
exit 64
"#;

/// Write the stand-in interpreter into `dir` and return its path.
pub fn stub_python(dir: &Path) -> PathBuf {
    let path = dir.join("python");
    std::fs::write(&path, STUB_PYTHON).expect("write stub");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod stub");
    path
}
