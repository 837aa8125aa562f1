use asset_viewer_api::{AssetKind, AssetRenderer};

/// three.js release the model renderer is pinned to.
pub const THREE_VERSION: &str = "0.168.0";

const SCRIPT: &str = r#"
import * as THREE from "three";
import { GLTFLoader } from "three/addons/loaders/GLTFLoader.js";

const loader = new GLTFLoader();

function render(asset, url, thumb, meta) {
  const canvas = document.createElement("canvas");
  thumb.appendChild(canvas);

  const scene = new THREE.Scene();
  scene.background = new THREE.Color(0x0d141d);
  const camera = new THREE.PerspectiveCamera(45, 1, 0.1, 100);
  camera.position.set(2.5, 2, 2.5);
  camera.lookAt(0, 0, 0);

  const renderer = new THREE.WebGLRenderer({ canvas, antialias: true });
  renderer.setSize(256, 256, false);

  scene.add(new THREE.AmbientLight(0xffffff, 0.6));
  const sun = new THREE.DirectionalLight(0xffffff, 0.8);
  sun.position.set(5, 6, 4);
  scene.add(sun);
  scene.add(new THREE.GridHelper(6, 6, 0x223547, 0x152433));

  loader.load(
    url,
    (gltf) => {
      const model = gltf.scene;
      const box = new THREE.Box3().setFromObject(model);
      const size = box.getSize(new THREE.Vector3());
      const center = box.getCenter(new THREE.Vector3());
      model.position.sub(center);
      const maxDim = Math.max(size.x, size.y, size.z) || 1;
      const scale = 2 / maxDim;
      if (scale < 1) model.scale.setScalar(scale);
      scene.add(model);
      meta.textContent = "Scenes:" + gltf.scenes.length + " Anim:" + gltf.animations.length;
    },
    undefined,
    (err) => {
      meta.textContent = "Error";
      console.error(asset.filename, err);
    },
  );

  function animate() {
    scene.rotation.y += 0.01;
    renderer.render(scene, camera);
    requestAnimationFrame(animate);
  }
  animate();
}
"#;

/// Draws glTF models on a rotating three.js turntable.
#[derive(Debug)]
pub struct ModelRenderer {
    head: String,
}

impl ModelRenderer {
    pub fn new() -> Self {
        Self::with_module_base(&format!("https://unpkg.com/three@{}", THREE_VERSION))
    }

    /// Resolve the `three` import map against another package root, such as
    /// a local mirror.
    pub fn with_module_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let head = format!(
            r#"<script type="importmap">{{"imports":{{"three":"{base}/build/three.module.js","three/addons/":"{base}/examples/jsm/"}}}}</script>"#
        );
        Self { head }
    }
}

impl Default for ModelRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRenderer for ModelRenderer {
    fn kind(&self) -> AssetKind {
        AssetKind::Model
    }

    fn name(&self) -> &str {
        "three.js glTF Renderer"
    }

    fn head(&self) -> Option<&str> {
        Some(&self.head)
    }

    fn script(&self) -> &str {
        SCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_map_pins_version() {
        let renderer = ModelRenderer::new();
        let head = renderer.head().unwrap();

        assert!(head.starts_with(r#"<script type="importmap">"#));
        assert!(head.contains(&format!(
            "https://unpkg.com/three@{}/build/three.module.js",
            THREE_VERSION
        )));
        assert!(!head.contains("node_modules"));
    }

    #[test]
    fn test_custom_module_base() {
        let renderer = ModelRenderer::with_module_base("/vendor/three/");
        let head = renderer.head().unwrap();

        assert!(head.contains(r#""three":"/vendor/three/build/three.module.js""#));
        assert!(head.contains(r#""three/addons/":"/vendor/three/examples/jsm/""#));
    }

    #[test]
    fn test_script_defines_render() {
        let renderer = ModelRenderer::new();

        assert_eq!(renderer.kind(), AssetKind::Model);
        assert!(renderer.script().contains("function render(asset, url, thumb, meta)"));
        assert!(renderer.script().contains("GLTFLoader"));
    }
}
