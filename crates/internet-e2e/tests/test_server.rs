// Test Server - Local replica of the exercised demo-site pages
//
// Serves handcrafted copies of the-internet.herokuapp.com pages used by
// the suite. This enables deterministic, offline integration testing.

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Test server handle
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start the test server on a random available port
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/", get(home_page))
            .route("/abtest", get(abtest_page))
            .route("/add_remove_elements/", get(add_remove_page))
            .route("/checkboxes", get(checkboxes_page))
            .route("/dropdown", get(dropdown_page))
            .route("/download", get(download_page))
            .route("/download/some-file.txt", get(some_file))
            .route("/download/zero_bytes_file.txt", get(zero_bytes_file))
            .route("/download/data.json", get(data_json_file))
            .route("/download_secure", get(secure_download_page))
            .route("/javascript_alerts", get(js_alerts_page))
            .route("/key_presses", get(key_presses_page))
            .route("/tables", get(tables_page));

        // Bind to port 0 to get any available port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test server");

        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        TestServer { addr, handle }
    }

    /// Get the base URL of the test server
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Shutdown the test server
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

// Replica pages

async fn home_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>The Internet</title></head>
<body>
  <h1 class="heading">Welcome to the-internet</h1>
  <h2>Available Examples</h2>
  <ul>
    <li><a href="/abtest">A/B Testing</a></li>
    <li><a href="/add_remove_elements/">Add/Remove Elements</a></li>
    <li><a href="/checkboxes">Checkboxes</a></li>
    <li><a href="/dropdown">Dropdown</a></li>
    <li><a href="/download">File Download</a></li>
    <li><a href="/javascript_alerts">JavaScript Alerts</a></li>
    <li><a href="/key_presses">Key Presses</a></li>
    <li><a href="/download_secure">Secure File Download</a></li>
    <li><a href="/tables">Sortable Data Tables</a></li>
  </ul>
</body>
</html>"#,
    )
}

async fn abtest_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>A/B Test Control</h3>
    <p>Also known as split testing.</p>
  </div>
</body>
</html>"#,
    )
}

async fn add_remove_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>Add/Remove Elements</h3>
    <button onclick="addElement()">Add Element</button>
    <div id="elements"></div>
  </div>
  <script>
    function addElement() {
      var button = document.createElement('button');
      button.className = 'added-manually';
      button.textContent = 'Delete';
      button.onclick = function () { this.remove(); };
      document.getElementById('elements').appendChild(button);
    }
  </script>
</body>
</html>"#,
    )
}

async fn checkboxes_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>Checkboxes</h3>
    <form id="checkboxes">
      <input type="checkbox"> checkbox 1<br>
      <input type="checkbox" checked> checkbox 2
    </form>
  </div>
</body>
</html>"#,
    )
}

async fn dropdown_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>Dropdown List</h3>
    <select id="dropdown">
      <option disabled selected value="">Please select an option</option>
      <option value="1">Option 1</option>
      <option value="2">Option 2</option>
    </select>
  </div>
</body>
</html>"#,
    )
}

async fn download_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>File Downloader</h3>
    <a href="/download/some-file.txt">some-file.txt</a><br>
    <a href="/download/zero_bytes_file.txt">zero_bytes_file.txt</a><br>
    <a href="/download/data.json">data.json</a>
  </div>
</body>
</html>"#,
    )
}

async fn secure_download_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>Secure File Downloader</h3>
  </div>
</body>
</html>"#,
    )
}

async fn some_file() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("some file content for download tests\n"))
        .unwrap()
}

async fn zero_bytes_file() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::empty())
        .unwrap()
}

async fn data_json_file() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"widgets": 9, "working": true}"#))
        .unwrap()
}

async fn js_alerts_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>JavaScript Alerts</h3>
    <button onclick="jsAlert()">Click for JS Alert</button>
    <button onclick="jsConfirm()">Click for JS Confirm</button>
    <button onclick="jsPrompt()">Click for JS Prompt</button>
    <p id="result"></p>
  </div>
  <script>
    function jsAlert() {
      alert('I am a JS Alert');
      document.getElementById('result').textContent = 'You successfully clicked an alert';
    }
    function jsConfirm() {
      var ok = confirm('I am a JS Confirm');
      document.getElementById('result').textContent = 'You clicked: ' + (ok ? 'Ok' : 'Cancel');
    }
    function jsPrompt() {
      var text = prompt('I am a JS prompt', 'default');
      document.getElementById('result').textContent = 'You entered: ' + text;
    }
  </script>
</body>
</html>"#,
    )
}

async fn key_presses_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>Key Presses</h3>
    <input type="text" id="target">
    <p id="result"></p>
  </div>
  <script>
    document.getElementById('target').addEventListener('keyup', function (e) {
      document.getElementById('result').textContent = 'You entered: ' + e.key.toUpperCase();
    });
  </script>
</body>
</html>"#,
    )
}

async fn tables_page() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="example">
    <h3>Data Tables</h3>
    <table id="table1" class="tablesorter">
      <thead>
        <tr>
          <th><span onclick="sortColumn(this)">Last Name</span></th>
          <th><span onclick="sortColumn(this)">First Name</span></th>
          <th><span onclick="sortColumn(this)">Email</span></th>
          <th><span onclick="sortColumn(this)">Due</span></th>
          <th><span onclick="sortColumn(this)">Web Site</span></th>
          <th>Action</th>
        </tr>
      </thead>
      <tbody>
        <tr><td>Smith</td><td>John</td><td>jsmith@gmail.com</td><td>$50.00</td><td>http://www.jsmith.com</td><td>edit delete</td></tr>
        <tr><td>Bach</td><td>Frank</td><td>fbach@yahoo.com</td><td>$51.00</td><td>http://www.frank.com</td><td>edit delete</td></tr>
        <tr><td>Doe</td><td>Jason</td><td>jdoe@hotmail.com</td><td>$100.00</td><td>http://www.jdoe.com</td><td>edit delete</td></tr>
        <tr><td>Conway</td><td>Tim</td><td>tconway@earthlink.net</td><td>$50.00</td><td>http://www.timconway.com</td><td>edit delete</td></tr>
      </tbody>
    </table>
    <table id="table2" class="tablesorter">
      <thead>
        <tr>
          <th><span onclick="sortColumn(this)">Last Name</span></th>
          <th><span onclick="sortColumn(this)">First Name</span></th>
          <th><span onclick="sortColumn(this)">Email</span></th>
          <th><span onclick="sortColumn(this)">Due</span></th>
          <th><span onclick="sortColumn(this)">Web Site</span></th>
          <th>Action</th>
        </tr>
      </thead>
      <tbody>
        <tr><td>Smith</td><td>John</td><td>jsmith@gmail.com</td><td>$50.00</td><td>http://www.jsmith.com</td><td>edit delete</td></tr>
        <tr><td>Bach</td><td>Frank</td><td>fbach@yahoo.com</td><td>$51.00</td><td>http://www.frank.com</td><td>edit delete</td></tr>
        <tr><td>Doe</td><td>Jason</td><td>jdoe@hotmail.com</td><td>$100.00</td><td>http://www.jdoe.com</td><td>edit delete</td></tr>
        <tr><td>Conway</td><td>Tim</td><td>tconway@earthlink.net</td><td>$50.00</td><td>http://www.timconway.com</td><td>edit delete</td></tr>
      </tbody>
    </table>
  </div>
  <script>
    function sortColumn(span) {
      var th = span.closest('th');
      var table = span.closest('table');
      var idx = Array.prototype.indexOf.call(th.parentNode.children, th);
      var dir = th.dataset.dir === 'asc' ? 'desc' : 'asc';
      Array.prototype.forEach.call(
        table.querySelectorAll('thead th'),
        function (h) { delete h.dataset.dir; }
      );
      th.dataset.dir = dir;
      var tbody = table.querySelector('tbody');
      var rows = Array.prototype.slice.call(tbody.querySelectorAll('tr'));
      function num(s) {
        var c = s.replace(/[^0-9.\-]+/g, '');
        if (c === '' || c === '.' || c === '-') return NaN;
        return parseFloat(c);
      }
      rows.sort(function (a, b) {
        var x = a.children[idx].textContent.trim();
        var y = b.children[idx].textContent.trim();
        var xn = num(x), yn = num(y);
        var cmp = (!isNaN(xn) && !isNaN(yn)) ? xn - yn : x.localeCompare(y);
        return dir === 'asc' ? cmp : -cmp;
      });
      rows.forEach(function (r) { tbody.appendChild(r); });
    }
  </script>
</body>
</html>"#,
    )
}
