use career_core::{mesh_from_gltf_bytes, AssetLoader, LoadError, MeshData};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetches a GLB/glTF file over HTTP and decodes it into a mesh.
#[derive(Default)]
pub struct FetchLoader;

impl AssetLoader for FetchLoader {
    type Asset = MeshData;
    type Error = LoadError;

    async fn load(&mut self, location: &str) -> Result<MeshData, LoadError> {
        let bytes = fetch_bytes(location).await?;
        log::info!("[asset] received {} bytes from {}", bytes.len(), location);
        mesh_from_gltf_bytes(&bytes).map_err(|source| LoadError::Decode {
            location: location.to_string(),
            source,
        })
    }
}

async fn fetch_bytes(location: &str) -> Result<Vec<u8>, LoadError> {
    let fetch_err = |e: JsValue| LoadError::Fetch {
        location: location.to_string(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| fetch_err(JsValue::from_str("no window")))?;

    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(location, &opts).map_err(fetch_err)?;

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_err)?
        .dyn_into()
        .map_err(fetch_err)?;
    if !resp.ok() {
        return Err(LoadError::Status {
            location: location.to_string(),
            status: resp.status(),
        });
    }
    if let Ok(Some(len)) = resp.headers().get("content-length") {
        log::info!("[asset] {}: downloading {} bytes", location, len);
    }

    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
