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

use std::process::exit;

use clap::Parser;
use hanzicards_core::error::Fallible;
use tokio::spawn;

use crate::cmd::check::check_collection;
use crate::cmd::decompose::DecomposeFormat;
use crate::cmd::decompose::print_decomposition;
use crate::cmd::export::export_collection;
use crate::cmd::pinyin::print_pinyin;
use crate::cmd::preview::server::PreviewConfig;
use crate::cmd::preview::server::start_server;
use crate::utils::wait_for_server;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Render numbered pinyin with tone marks.
    Pinyin {
        /// Pronunciations like `ni3 hao3` or `lu:e4`.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the decomposition tree of a word or character.
    Decompose {
        /// The headword to decompose.
        headword: String,
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = DecomposeFormat::Html)]
        format: DecomposeFormat,
    },
    /// Export the fields of every note as JSON.
    Export {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// Optional path to the output file. By default, the output is printed to stdout.
        #[arg(long)]
        output: Option<String>,
    },
    /// Check the integrity of a collection.
    Check {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Preview the notes through a web interface.
    Preview {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// The port to use for the web server. Default is 8000.
        #[arg(long, default_value_t = 8000)]
        port: u16,
        /// Whether to open the browser automatically. Default is true.
        #[arg(long)]
        open_browser: Option<bool>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Pinyin { text } => print_pinyin(&text),
        Command::Decompose {
            headword,
            directory,
            format,
        } => print_decomposition(&headword, directory, format),
        Command::Export { directory, output } => export_collection(directory, output),
        Command::Check { directory } => check_collection(directory),
        Command::Preview {
            directory,
            host,
            port,
            open_browser,
        } => {
            if open_browser.unwrap_or(true) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = PreviewConfig {
                directory,
                host,
                port,
            };
            start_server(config).await
        }
    }
}
