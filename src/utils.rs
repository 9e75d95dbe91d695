// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use hanzicards_core::error::Fallible;
use hanzicards_core::error::fail;
use tokio::net::TcpStream;
use tokio::time::sleep;
use tokio::time::timeout;

// max-age is one week in seconds.
pub const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=604800, immutable";

/// How long the preview server gets to start accepting connections.
const SERVER_START_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn wait_for_server(host: &str, port: u16) -> Fallible<()> {
    wait_for_server_within(host, port, SERVER_START_TIMEOUT).await
}

/// Poll `host:port` until it accepts a connection or `limit` elapses.
pub async fn wait_for_server_within(host: &str, port: u16, limit: Duration) -> Fallible<()> {
    let address = format!("{host}:{port}");
    let poll = async {
        while TcpStream::connect(&address).await.is_err() {
            sleep(Duration::from_millis(5)).await;
        }
    };
    match timeout(limit, poll).await {
        Ok(()) => {
            log::debug!("Server is up on {address}");
            Ok(())
        }
        Err(_) => fail(format!(
            "server on {address} did not start within {} ms.",
            limit.as_millis()
        )),
    }
}
