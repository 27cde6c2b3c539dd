use eframe::egui;

pub const LOGO_PNG: &[u8] = include_bytes!("../../assets/logo.png");

const LOGO_MAX_EDGE: u32 = 256;

pub(crate) struct DecodedLogo {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) rgba: Vec<u8>,
}

pub(crate) fn decode_logo(bytes: &[u8]) -> Result<DecodedLogo, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic.thumbnail(LOGO_MAX_EDGE, LOGO_MAX_EDGE).to_rgba8();
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(DecodedLogo {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

enum LogoState {
    Pending,
    Ready(egui::TextureHandle),
    Unavailable,
}

/// Uploads the embedded logo on first use. A bad asset leaves the alt text in place.
pub struct LogoTexture {
    state: LogoState,
}

impl Default for LogoTexture {
    fn default() -> Self {
        Self {
            state: LogoState::Pending,
        }
    }
}

impl LogoTexture {
    pub fn get(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if matches!(self.state, LogoState::Pending) {
            self.state = match decode_logo(LOGO_PNG) {
                Ok(logo) => {
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [logo.width, logo.height],
                        &logo.rgba,
                    );
                    LogoState::Ready(ctx.load_texture(
                        "app-logo",
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
                Err(err) => {
                    tracing::warn!("failed to decode logo asset: {err}");
                    LogoState::Unavailable
                }
            };
        }
        match &self.state {
            LogoState::Ready(texture) => Some(texture),
            LogoState::Pending | LogoState::Unavailable => None,
        }
    }
}
