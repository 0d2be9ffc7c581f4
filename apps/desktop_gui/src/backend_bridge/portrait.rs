//! Portrait decoding, done on the backend worker so the UI thread only
//! uploads ready RGBA pixels.

const PORTRAIT_MAX_DIMENSION: u32 = 256;

#[derive(Clone)]
pub struct PortraitImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_portrait(bytes: &[u8]) -> Result<PortraitImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic
        .thumbnail(PORTRAIT_MAX_DIMENSION, PORTRAIT_MAX_DIMENSION)
        .to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(PortraitImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}
