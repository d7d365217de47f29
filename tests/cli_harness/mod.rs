//! Harness for driving the built `vibejam` binary against a scripted
//! chat-completion server.

use serde_json::json;
use std::fs;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Convenience result alias for harness operations.
pub type HarnessResult<T> = Result<T, String>;

/// Local HTTP server that answers every request with scripted JSON bodies.
pub struct MockModelServer {
    address: String,
    shutdown: Arc<AtomicBool>,
    requests: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl MockModelServer {
    /// Start a server whose only reply carries `content` as the assistant text.
    pub fn replying(content: &str) -> HarnessResult<Self> {
        Self::start_with_responses(vec![chat_completion(content)])
    }

    /// Start a local scripted server bound to `127.0.0.1:*`.
    pub fn start_with_responses(responses: Vec<serde_json::Value>) -> HarnessResult<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|e| format!("failed binding mock server: {e}"))?;
        listener
            .set_nonblocking(true)
            .map_err(|e| format!("failed setting nonblocking listener: {e}"))?;
        let addr = listener
            .local_addr()
            .map_err(|e| format!("failed getting mock server addr: {e}"))?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let requests = Arc::new(AtomicUsize::new(0));
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(responses);
        let shutdown_flag = Arc::clone(&shutdown);
        let request_count = Arc::clone(&requests);
        let request_bodies = Arc::clone(&bodies);
        let thread = thread::spawn(move || {
            while !shutdown_flag.load(Ordering::Relaxed) {
                match listener.accept() {
                    Ok((mut stream, _)) => {
                        if shutdown_flag.load(Ordering::Relaxed) {
                            break;
                        }
                        let _ = stream.set_nonblocking(false);
                        let idx = request_count.fetch_add(1, Ordering::Relaxed);
                        if let Ok(body) = read_http_json_body(&mut stream) {
                            if let Ok(mut bodies) = request_bodies.lock() {
                                bodies.push(body);
                            }
                        }
                        let response = responses.get(idx).or_else(|| responses.last());
                        if let Some(response) = response {
                            let _ = write_http_json(&mut stream, response);
                        }
                    }
                    Err(_) => thread::sleep(Duration::from_millis(20)),
                }
            }
        });

        Ok(Self {
            address: format!("http://{addr}"),
            shutdown,
            requests,
            bodies,
            thread: Some(thread),
        })
    }

    /// Base URL suitable for `api.base_url` (`.../v1` included).
    pub fn base_url_v1(&self) -> String {
        format!("{}/v1", self.address)
    }

    /// Number of handled requests.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    /// JSON bodies received so far.
    pub fn request_bodies(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().map(|b| b.clone()).unwrap_or_default()
    }
}

impl Drop for MockModelServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(host) = self.address.strip_prefix("http://") {
            let _ = TcpStream::connect(host).and_then(|s| s.shutdown(Shutdown::Both));
        }
        if let Some(join) = self.thread.take() {
            let _ = join.join();
        }
    }
}

/// Chat-completion response body with one assistant message.
pub fn chat_completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-cli-1",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 300,
            "completion_tokens": 200,
            "total_tokens": 500
        }
    })
}

/// A complete theme as the model would return it.
pub fn theme_json() -> String {
    json!({
        "palette": {
            "0": "#282a36", "1": "#ff5555", "2": "#50fa7b", "3": "#f1fa8c",
            "4": "#bd93f9", "5": "#ff79c6", "6": "#8be9fd", "7": "#f8f8f2",
            "8": "#6272a4", "9": "#ff6e6e", "10": "#69ff94", "11": "#ffffa5",
            "12": "#d6acff", "13": "#ff92df", "14": "#a4ffff", "15": "#ffffff"
        },
        "background": "#282a36",
        "foreground": "#f8f8f2",
        "cursor-color": "#f8f8f2",
        "selection-background": "#44475a",
        "selection-foreground": "#ffffff"
    })
    .to_string()
}

/// Isolated HOME, working directory, and output directories for one run.
pub struct Sandbox {
    root: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> HarnessResult<Self> {
        let root = tempfile::Builder::new()
            .prefix("vibejam-cli-")
            .tempdir()
            .map_err(|e| format!("failed creating sandbox: {e}"))?;
        for dir in ["home", "work"] {
            fs::create_dir_all(root.path().join(dir))
                .map_err(|e| format!("failed creating sandbox dir: {e}"))?;
        }
        Ok(Self { root })
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn json_dir(&self) -> PathBuf {
        self.path("work/themes/ghostty")
    }

    pub fn install_dir(&self) -> PathBuf {
        self.path("ghostty-themes")
    }

    /// Write `vibejam.toml` pointing at `base_url`; returns its path.
    pub fn write_config(&self, base_url: &str) -> HarnessResult<PathBuf> {
        let path = self.path("vibejam.toml");
        let content = format!(
            r#"[api]
base_url = "{base_url}"
model = "cli-test-model"
api_key_env = "VIBEJAM_TEST_KEY"

[install]
json_dir = "{json_dir}"
target_dir = "{target_dir}"
elevation = "never"

[display]
color = false
"#,
            json_dir = toml_path(&self.json_dir()),
            target_dir = toml_path(&self.install_dir()),
        );
        fs::write(&path, content).map_err(|e| format!("failed writing test config: {e}"))?;
        Ok(path)
    }

    /// Run the binary with a scrubbed environment rooted in the sandbox.
    pub fn run(&self, args: &[&str], env: &[(&str, &str)]) -> HarnessResult<Output> {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vibejam"));
        cmd.args(args)
            .current_dir(self.path("work"))
            .env("HOME", self.path("home"))
            .env("XDG_CONFIG_HOME", self.path("home/.config"))
            .env("NO_COLOR", "1");
        for var in [
            "OPENAI_API_KEY",
            "VIBEJAM_API_KEY",
            "VIBEJAM_BASE_URL",
            "VIBEJAM_MODEL",
            "VIBEJAM_API_TIMEOUT_SECS",
            "VIBEJAM_INSTALL_DIR",
            "VIBEJAM_LOG",
            "VIBEJAM_TEST_KEY",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.output()
            .map_err(|e| format!("failed running vibejam: {e}"))
    }
}

fn toml_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "\\\\")
}

fn read_http_json_body(stream: &mut TcpStream) -> HarnessResult<serde_json::Value> {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .map_err(|e| format!("failed setting read timeout: {e}"))?;
    let mut buffer = Vec::<u8>::new();
    let mut temp = [0u8; 2048];
    let mut header_end: Option<usize> = None;
    let mut content_length: usize = 0;

    loop {
        let n = stream
            .read(&mut temp)
            .map_err(|e| format!("failed reading request bytes: {e}"))?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&temp[..n]);
        if header_end.is_none() {
            if let Some(idx) = find_header_terminator(&buffer) {
                header_end = Some(idx);
                let headers = String::from_utf8_lossy(&buffer[..idx]).to_string();
                content_length = parse_content_length(&headers).unwrap_or(0);
            }
        }
        if let Some(idx) = header_end {
            let body_len = buffer.len().saturating_sub(idx + 4);
            if body_len >= content_length {
                break;
            }
        }
    }

    let idx =
        header_end.ok_or_else(|| "malformed HTTP request (missing header end)".to_string())?;
    let body = &buffer[idx + 4..];
    serde_json::from_slice(body).map_err(|e| format!("failed parsing request json: {e}"))
}

fn find_header_terminator(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|window| window == b"\r\n\r\n")
}

fn parse_content_length(headers: &str) -> Option<usize> {
    headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse::<usize>().ok()
        } else {
            None
        }
    })
}

fn write_http_json(stream: &mut TcpStream, body: &serde_json::Value) -> HarnessResult<()> {
    let payload = serde_json::to_string(body)
        .map_err(|e| format!("failed serializing response json: {e}"))?;
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    stream
        .write_all(response.as_bytes())
        .map_err(|e| format!("failed writing response bytes: {e}"))
}
