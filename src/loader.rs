use fnv::FnvHashMap;
use sphere_core::{decode_photo, DecodedPhoto, ImageRef, ImageRequest, LoadError, MAX_TEXTURE_DIM};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type LoadResult = (ImageRequest, Result<Rc<DecodedPhoto>, LoadError>);

/// Finished loads waiting for the frame loop to apply them.
pub type LoadQueue = Rc<RefCell<Vec<LoadResult>>>;

/// Fetch and decode every requested image. Requests sharing a URL share
/// one fetch; results land in `queue` in completion order.
pub fn spawn_loads(requests: Vec<ImageRequest>, queue: &LoadQueue) {
    let mut by_url: FnvHashMap<ImageRef, Vec<ImageRequest>> = FnvHashMap::default();
    for request in requests {
        by_url
            .entry(request.image_ref.clone())
            .or_default()
            .push(request);
    }
    for (image_ref, group) in by_url {
        let queue = queue.clone();
        spawn_local(async move {
            let outcome = load_photo(image_ref.as_str()).await.map(Rc::new);
            let reason = outcome.as_ref().err().map(|e| e.to_string());
            let mut queue = queue.borrow_mut();
            for request in group {
                let result = match (&outcome, &reason) {
                    (Ok(photo), _) => Ok(Rc::clone(photo)),
                    (Err(_), reason) => Err(LoadError::Fetch {
                        url: request.image_ref.to_string(),
                        reason: reason.clone().unwrap_or_default(),
                    }),
                };
                queue.push((request, result));
            }
        });
    }
}

async fn load_photo(url: &str) -> Result<DecodedPhoto, LoadError> {
    let bytes = fetch_bytes(url).await?;
    decode_photo(&bytes, MAX_TEXTURE_DIM)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LoadError> {
    let fetch_err = |reason: String| LoadError::Fetch {
        url: url.to_string(),
        reason,
    };
    let window = web::window().ok_or_else(|| fetch_err("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?
        .dyn_into::<web::Response>()
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    if !response.ok() {
        return Err(fetch_err(format!("HTTP {}", response.status())));
    }
    let promise = response
        .array_buffer()
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    let buffer = JsFuture::from(promise)
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
