use reqwest::StatusCode;
use reqwest::blocking::get;
use std::path::PathBuf;
use std::process::{Child, Command};
use std::thread;
use std::time::{Duration, Instant};

const WEATHER_DATA: &str = r#"{
    "Nairobi": {"name": "Nairobi", "main": {"temp": 23.5}, "weather": [{"description": "clear sky"}]},
    "Arusha": {"name": "Arusha", "main": {"temp": 19.2}, "weather": [{"description": "light rain"}]},
    "Kampala": {"name": "Kampala", "main": {"temp": 25.1}, "weather": [{"description": "scattered clouds"}]}
}"#;

struct DashboardTestServer {
    process: Child,
    base_url: String,
}

impl DashboardTestServer {
    fn spawn(port: u16, data: &str) -> Self {
        let dashboard_executable = env!("CARGO_BIN_EXE_weather_dashboard");
        let server = DashboardTestServer {
            process: Command::new(dashboard_executable)
                .args(["--port", &port.to_string(), "--data", data])
                .spawn()
                .expect("Could not start dashboard"),
            base_url: format!("http://127.0.0.1:{port}"),
        };
        let deadline = Instant::now() + Duration::from_secs(10);
        while get(&server.base_url).is_err() {
            assert!(Instant::now() < deadline, "dashboard did not start listening");
            thread::sleep(Duration::from_millis(1));
        }
        server
    }

    fn get(&self, path: &str) -> (StatusCode, String) {
        let response = get(format!("{}{}", self.base_url, path)).expect("Could not send request");
        let status = response.status();
        (status, response.text().expect("Could not read body"))
    }
}

impl Drop for DashboardTestServer {
    fn drop(&mut self) {
        self.process
            .kill()
            .expect("Failed to send kill signal to dashboard");
        self.process.wait().expect("Dashboard failed to stop");
    }
}

fn write_weather_data(name: &str, contents: &str) -> PathBuf {
    let file_path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::write(&file_path, contents).expect("Could not write weather data");
    file_path
}

#[test]
fn index_shows_rendered_cities() {
    let data = write_weather_data("http_tests_weather_data.json", WEATHER_DATA);
    let server = DashboardTestServer::spawn(3101, data.to_str().unwrap());

    let (status, body) = server.get("/");

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"src="images/nairobi.jpg""#));
    assert!(body.contains(r#"src="images/arusha.jpg""#));
    assert!(body.contains(r#"src="images/kampala.jpg""#));
    assert!(body.contains("Temperature: 23.5°C"));
    assert!(body.contains("Condition: scattered clouds"));
}

#[test]
fn missing_data_still_serves_empty_page() {
    let server = DashboardTestServer::spawn(3102, "no/such/weather_data.json");

    let (status, body) = server.get("/");

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<div id="nairobi" class="city"></div>"#));
    assert!(!body.contains("Temperature:"));
}
