use proto::{STORE_BINDING, STORE_KEY, STORE_ROUTE};
use worker::*;

// Export the Durable Object from score_do
pub use score_do::ScoreStoreDO;

#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    let router = Router::new();

    router
        .get_async("/", handle_index)
        .on_async(STORE_ROUTE, handle_scores)
        .run(req, env)
        .await
}

async fn handle_index(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    let html = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Pong</title>
    <style>
        body { margin: 0; padding: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; background: #f4f4f4; font-family: Arial, sans-serif; }
        #pongCanvas { border: 2px solid #333; background: #fff; }
        #controls { margin-top: 16px; }
        button, select { padding: 8px 16px; margin: 5px; font-size: 14px; }
        #status { margin-top: 8px; font-size: 12px; color: #888; }
    </style>
</head>
<body>
    <canvas id="pongCanvas" width="800" height="400"></canvas>
    <div id="controls">
        <button id="startBtn">Start Game</button>
        <button id="pauseBtn">Pause</button>
        <select id="difficulty">
            <option value="easy">Easy</option>
            <option value="medium" selected>Medium</option>
            <option value="hard">Hard</option>
        </select>
    </div>
    <div id="status">Player 1: W/S &nbsp; Player 2: Arrow Up/Down</div>
    <script type="module">
        import init, { run } from './pkg/client_wasm.js';

        async function main() {
            try {
                await init();
                const scheme = location.protocol === 'https:' ? 'wss:' : 'ws:';
                run('pongCanvas', `${scheme}//${location.host}/scores`);
            } catch (error) {
                console.error('Error:', error);
                document.getElementById('status').textContent = 'Error: ' + error;
            }
        }

        main();
    </script>
</body>
</html>"#;
    Response::from_html(html)
}

/// Every score request (socket upgrade, GET, PUT) goes to the single store object
async fn handle_scores(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let namespace = ctx.env.durable_object(STORE_BINDING)?;
    let stub = namespace.get_by_name(STORE_KEY)?;
    stub.fetch_with_request(req).await
}
