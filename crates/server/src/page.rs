//! The single-page viewer UI.
//!
//! The document is assembled once from the renderer registry: renderer head
//! fragments go into `<head>`, each renderer's module registers its `render`
//! function under its asset kind, and the loader module fetches the asset
//! list and hands every record to the matching renderer.

use asset_viewer_api::{ASSETS_ROUTE, RendererRegistry};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Asset Viewer</title>
  <script>window.assetRenderers = {};</script>
  {{HEAD}}
  <style>
    *{box-sizing:border-box;margin:0;padding:0}
    body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Ubuntu,sans-serif;background:#0f1623;color:#fff;min-height:100vh;padding:18px}
    h1{font-size:1.6rem;margin-bottom:12px;background:linear-gradient(90deg,#4ec9ff,#6cf);-webkit-background-clip:text;background-clip:text;color:transparent;font-weight:600}
    .toolbar{display:flex;gap:12px;align-items:center;margin-bottom:18px;flex-wrap:wrap}
    button{background:linear-gradient(45deg,#4ec9ff,#6cf);color:#062030;border:none;padding:8px 14px;border-radius:8px;font-weight:600;cursor:pointer}
    button:disabled{opacity:.5;cursor:not-allowed}
    #error{color:#ff6b6b;font-size:.85rem}
    #grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:16px}
    .card{background:#152233;border:1px solid #223547;border-radius:12px;padding:10px;display:flex;flex-direction:column;gap:8px;position:relative;overflow:hidden}
    .thumb{background:#111;border:1px solid #223547;border-radius:8px;display:flex;align-items:center;justify-content:center;aspect-ratio:1/1;position:relative;overflow:hidden}
    canvas{width:100%;height:100%;display:block}
    img{max-width:100%;max-height:100%;object-fit:contain;display:block}
    .badge{position:absolute;top:6px;left:6px;background:#4ec9ff;color:#052030;font-size:10px;padding:3px 6px;border-radius:6px;font-weight:700;text-transform:uppercase;letter-spacing:.5px}
    .name{font-size:.85rem;font-weight:600;white-space:nowrap;overflow:hidden;text-overflow:ellipsis;color:#9cd6ff}
    .meta{font-size:.65rem;opacity:.65;line-height:1.2;min-height:1em}
    footer{margin-top:30px;font-size:.65rem;opacity:.5}
    .spinner{width:22px;height:22px;border:3px solid #223547;border-top:3px solid #4ec9ff;border-radius:50%;animation:spin 1s linear infinite}
    @keyframes spin{to{transform:rotate(360deg)}}
    .loading-overlay{position:fixed;inset:0;background:#0f1623;display:flex;flex-direction:column;align-items:center;justify-content:center;gap:18px;font-size:.9rem;z-index:10}
  </style>
</head>
<body>
  <div class="loading-overlay" id="loading"><div class="spinner"></div><div>Scanning assets...</div></div>
  <h1>Asset Viewer</h1>
  <div class="toolbar"><button id="reloadBtn" type="button">Reload</button><span id="count"></span><span id="error"></span></div>
  <div id="grid"></div>
  <footer>Asset Viewer</footer>
  {{RENDERERS}}
  <script type="module">
    const ASSETS_ROUTE = "{{ASSETS_ROUTE}}";
    const grid = document.getElementById("grid");
    const countEl = document.getElementById("count");
    const errorEl = document.getElementById("error");
    const overlay = document.getElementById("loading");
    const reloadBtn = document.getElementById("reloadBtn");
    reloadBtn.onclick = load;

    async function load() {
      reloadBtn.disabled = true;
      overlay.style.display = "flex";
      errorEl.textContent = "";
      grid.innerHTML = "";
      try {
        const res = await fetch("/api/assets", { cache: "no-store" });
        if (!res.ok) {
          const body = await res.json().catch(() => ({}));
          throw new Error(body.error || res.status + " " + res.statusText);
        }
        const assets = await res.json();
        countEl.textContent = (assets.length === 0 ? "No" : assets.length) + " assets found";
        for (const asset of assets) addCard(asset);
      } catch (e) {
        countEl.textContent = "";
        errorEl.textContent = e.message;
      } finally {
        overlay.style.display = "none";
        reloadBtn.disabled = false;
      }
    }

    function addCard(asset) {
      const card = document.createElement("div");
      card.className = "card";
      const thumb = document.createElement("div");
      thumb.className = "thumb";
      const badge = document.createElement("div");
      badge.className = "badge";
      badge.textContent = asset.type;
      thumb.appendChild(badge);
      const name = document.createElement("div");
      name.className = "name";
      name.textContent = asset.filename;
      name.title = asset.path;
      const meta = document.createElement("div");
      meta.className = "meta";
      card.append(thumb, name, meta);
      grid.appendChild(card);

      const url = ASSETS_ROUTE + asset.path.split("/").map(encodeURIComponent).join("/");
      const render = window.assetRenderers[asset.type];
      if (render) {
        render(asset, url, thumb, meta);
      } else {
        meta.textContent = "No renderer for " + asset.type;
      }
    }

    load();
  </script>
</body>
</html>
"#;

/// Build the viewer page for the given renderers.
pub fn render_page(renderers: &RendererRegistry) -> String {
    let head: Vec<&str> = renderers.iter().filter_map(|r| r.head()).collect();

    let modules: Vec<String> = renderers
        .iter()
        .map(|r| {
            format!(
                "<script type=\"module\">\n{}\nwindow.assetRenderers[\"{}\"] = render;\n</script>",
                r.script().trim(),
                r.kind()
            )
        })
        .collect();

    TEMPLATE
        .replace("{{HEAD}}", &head.join("\n  "))
        .replace("{{RENDERERS}}", &modules.join("\n  "))
        .replace("{{ASSETS_ROUTE}}", ASSETS_ROUTE)
}
