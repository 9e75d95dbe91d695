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

pub mod server;
mod template;

#[cfg(test)]
mod tests {
    use hanzicards_core::error::Fallible;
    use hanzicards_core::types::note_hash::NoteHash;
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use tokio::spawn;

    use crate::cmd::preview::server::PreviewConfig;
    use crate::cmd::preview::server::start_server;
    use crate::helper::create_test_collection;
    use crate::helper::create_tmp_directory;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = PreviewConfig {
            directory: Some("./derpherp".to_string()),
            host: TEST_HOST.to_string(),
            port,
        };
        let result = start_server(config).await;
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_start_server_with_no_notes() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let dir = create_tmp_directory()?;
        std::fs::write(dir.join("order.json"), r#"["子"]"#)?;
        std::fs::write(dir.join("dictionary.json"), "{}")?;
        std::fs::write(dir.join("components.json"), "{}")?;
        let config = PreviewConfig {
            directory: Some(dir.display().to_string()),
            host: TEST_HOST.to_string(),
            port,
        };
        start_server(config).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_e2e() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let directory = create_test_collection()?;
        let config = PreviewConfig {
            directory: Some(directory),
            host: TEST_HOST.to_string(),
            port,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;

        // Hit the `style.css` endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/style.css"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers().get("content-type").unwrap(), "text/css");

        // Hit the not found endpoint.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Hit the index.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await.unwrap();
        assert!(html.contains("href=\"/note/4\""));
        assert!(!html.contains("href=\"/note/3\""));

        // Hit a note.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/note/4"))
            .await
            .unwrap();
        assert!(response.status().is_success());
        let html = response.text().await.unwrap();
        assert!(html.contains("nǐhǎo"));
        assert!(html.contains("<summary class=\"component-hanzi\">好</summary>"));
        assert!(html.contains("1.23E-4"));
        let guid = NoteHash::of_headword("你好").to_hex();
        assert!(html.contains(&guid));

        // Hit a note that was skipped.
        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/note/3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
