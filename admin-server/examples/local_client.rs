//! Local Client Example - 同进程启动服务并用 admin-client 访问
//!
//! 1. 在临时目录创建数据库并启动 HTTP 服务 (随机端口)
//! 2. 创建、更新、列出配色方案
//! 3. 通过 UserFieldsController 管理用户字段
//!
//! 运行: cargo run -p admin-server --example local_client

use std::sync::Arc;

use admin_client::dialog::LogErrorPopup;
use admin_client::{ClientConfig, ConfirmDialog, HttpRecordStore, UserFieldsController};
use admin_server::{Config, Server, ServerState, init_logger};
use async_trait::async_trait;
use shared::models::{ColorInput, ColorSchemeParams};
use tokio::net::TcpListener;

/// 示例中总是确认
struct AutoConfirm;

#[async_trait]
impl ConfirmDialog for AutoConfirm {
    async fn yes_no_confirm(&self, message: &str) -> bool {
        println!("   [confirm] {message} -> yes");
        true
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger()?;

    println!("=== Local Client Example ===\n");

    // === 1. 启动服务 ===
    let temp_dir = std::env::temp_dir().join("admin-local-example");
    std::fs::create_dir_all(&temp_dir)?;
    let config = Config::with_overrides(temp_dir.to_string_lossy(), 0);
    let state = ServerState::initialize(&config).await?;

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = Server::with_state(config, state);
    let handle = tokio::spawn(async move {
        server
            .serve(listener, async move {
                let _ = stop_rx.await;
            })
            .await
    });
    println!("1. Server listening on http://{addr}\n");

    let client = ClientConfig::new(format!("http://{addr}")).build_http_client()?;

    // === 2. 配色方案 ===
    println!("2. Color schemes");
    let scheme = client
        .create_color_scheme(ColorSchemeParams {
            name: Some(format!("Example {}", shared::util::now_millis())),
            colors: vec![ColorInput::new("primary", "FFBB00")],
            ..Default::default()
        })
        .await?;
    println!("   created {:?} with {} colors", scheme.name, scheme.colors.len());

    if let Some(id) = scheme.id {
        let bad = ColorSchemeParams {
            colors: vec![ColorInput::new("primary", "cool color please")],
            ..Default::default()
        };
        if let Err(e) = client.update_color_scheme(id, bad).await {
            println!("   rejected update: {}", e.user_message());
        }
    }
    for s in client.list_color_schemes().await? {
        println!("   - {} (base: {})", s.name, s.is_base);
    }

    // === 3. 用户字段 ===
    println!("\n3. User fields");
    let store = Arc::new(HttpRecordStore::new(client));
    let mut fields = UserFieldsController::new(store, Arc::new(AutoConfirm), Arc::new(LogErrorPopup));
    fields.load().await?;

    let key = fields.create_field()?;
    fields.field_mut(key)?.name = "Pronouns".to_string();
    fields.save(key).await?;
    fields.move_up(key).await?;
    for (_, f) in fields.sorted_fields() {
        println!("   - #{} {}", f.position, f.name);
    }
    fields.destroy(key).await?;

    let _ = stop_tx.send(());
    handle.await??;
    println!("\nDone.");
    Ok(())
}
