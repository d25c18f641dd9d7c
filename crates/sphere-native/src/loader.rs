use fnv::FnvHashMap;
use sphere_core::{decode_photo, DecodedPhoto, ImageRef, ImageRequest, LoadError, MAX_TEXTURE_DIM};
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use walkdir::WalkDir;

use crate::constants::PHOTO_EXTENSIONS;

pub type LoadResult = (ImageRequest, Result<Arc<DecodedPhoto>, LoadError>);

/// Image files directly inside `dir`, sorted for a stable order.
pub fn discover_photos(dir: &Path) -> Vec<ImageRef> {
    let mut paths: Vec<String> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file() && has_photo_extension(e.path()))
        .map(|e| e.path().display().to_string())
        .collect();
    paths.sort();
    paths.into_iter().map(ImageRef).collect()
}

fn has_photo_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            PHOTO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Decodes photos off the render thread. Results come back through
/// `drain`, which the frame loop calls once per frame.
pub struct PhotoLoader {
    requests: Sender<ImageRequest>,
    results: Receiver<LoadResult>,
}

impl PhotoLoader {
    pub fn spawn() -> anyhow::Result<Self> {
        let (request_tx, request_rx) = channel::<ImageRequest>();
        let (result_tx, result_rx) = channel::<LoadResult>();
        thread::Builder::new()
            .name("image-loader".into())
            .spawn(move || run_loader(request_rx, result_tx))?;
        Ok(Self {
            requests: request_tx,
            results: result_rx,
        })
    }

    pub fn request(&self, requests: Vec<ImageRequest>) {
        for request in requests {
            if self.requests.send(request).is_err() {
                log::error!("[image] loader thread has stopped");
                return;
            }
        }
    }

    pub fn drain(&self) -> Vec<LoadResult> {
        self.results.try_iter().collect()
    }
}

fn run_loader(requests: Receiver<ImageRequest>, results: Sender<LoadResult>) {
    // photos are reused cyclically, so decode each file once
    let mut cache: FnvHashMap<ImageRef, Arc<DecodedPhoto>> = FnvHashMap::default();
    for request in requests {
        let outcome = match cache.get(&request.image_ref) {
            Some(photo) => Ok(Arc::clone(photo)),
            None => load_file(&request.image_ref).map(|photo| {
                let photo = Arc::new(photo);
                cache.insert(request.image_ref.clone(), Arc::clone(&photo));
                photo
            }),
        };
        if results.send((request, outcome)).is_err() {
            break;
        }
    }
}

fn load_file(image_ref: &ImageRef) -> Result<DecodedPhoto, LoadError> {
    let bytes = std::fs::read(image_ref.as_str()).map_err(|e| LoadError::Io {
        path: image_ref.to_string(),
        reason: e.to_string(),
    })?;
    decode_photo(&bytes, MAX_TEXTURE_DIM)
}
