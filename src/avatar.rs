//! The avatar entity: construction, color mutation, and export.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{DynamicImage, RgbaImage};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::{Color, ColorSpec, Rgb};
use crate::compose;
use crate::error::{AvatarError, Result};
use crate::font::FontSource;
use crate::format::ImageFormat;
use crate::identity;
use crate::options::AvatarOptions;

// ============================================================================
// Avatar
// ============================================================================

/// A single-letter placeholder avatar.
///
/// An `Avatar` is created fully formed: inputs are validated, the font is
/// loaded, and the canvas is composed eagerly at construction. The canvas
/// always reflects the current letter and color; changing the color
/// recomposes it before the mutation returns.
///
/// # Example
///
/// ```
/// use letter_avatar::{Avatar, AvatarOptions, ImageFormat};
///
/// let options = AvatarOptions::new().with_size(250).with_color((191, 91, 81));
/// let avatar = Avatar::with_options("smallwat3r", options)?;
///
/// assert_eq!(avatar.letter(), 'S');
/// let png = avatar.stream(ImageFormat::Png)?;
/// assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
/// # Ok::<(), letter_avatar::AvatarError>(())
/// ```
#[derive(Debug)]
pub struct Avatar {
    letter: char,
    size: u32,
    color: Color,
    font: fontdue::Font,
    font_source: FontSource,
    rng: StdRng,
    canvas: RgbaImage,
}

impl Avatar {
    /// Builds an avatar from an identity string with default options:
    /// default size, capitalized letter, bundled font, random background.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_options(text, AvatarOptions::default())
    }

    /// Builds an avatar from an identity string and explicit options.
    ///
    /// Validation is fail-fast: an empty identity, a zero size, a malformed
    /// color, or an unloadable font each produce a typed error and no
    /// avatar.
    pub fn with_options(text: &str, options: AvatarOptions) -> Result<Self> {
        let letter = identity::display_char(text, options.capitalize)?;
        if options.size == 0 {
            return Err(AvatarError::InvalidInput(
                "size must be a positive number of pixels".into(),
            ));
        }

        let font_source = options.font.map(FontSource::file).unwrap_or_default();
        let font = font_source.load()?;

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let color = match options.color {
            Some(spec) => Color::resolve(spec)?,
            None => Color::random(&mut rng),
        };

        let canvas = compose::compose(letter, color.rgb(), options.size, &font);
        Ok(Self {
            letter,
            size: options.size,
            color,
            font,
            font_source,
            rng,
            canvas,
        })
    }

    // ---- Accessors ----

    /// The display character.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The canvas dimension in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The background color in the representation it was last set with:
    /// a hex string stays a hex string, anything else reads back as an
    /// RGB triple.
    pub fn color(&self) -> &ColorSpec {
        self.color.spec()
    }

    /// The background color in canonical RGB form.
    pub fn rgb(&self) -> Rgb {
        self.color.rgb()
    }

    /// The font source in use.
    pub fn font_source(&self) -> &FontSource {
        &self.font_source
    }

    /// The composed canvas.
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    // ---- Mutation ----

    /// Changes the background color and recomposes the canvas.
    ///
    /// Accepts a hex string or an RGB triple. The canvas is untouched if
    /// the color fails validation.
    pub fn change_color(&mut self, color: impl Into<ColorSpec>) -> Result<()> {
        self.color = Color::resolve(color.into())?;
        self.recompose();
        Ok(())
    }

    /// Draws a fresh random background color and recomposes the canvas.
    ///
    /// Always re-randomizes; the previous color is never kept.
    pub fn randomize_color(&mut self) {
        self.color = Color::random(&mut self.rng);
        self.recompose();
    }

    fn recompose(&mut self) {
        self.canvas = compose::compose(self.letter, self.color.rgb(), self.size, &self.font);
    }

    // ---- Export ----

    /// Encodes the current canvas as raw bytes in the given format.
    ///
    /// JPEG output is flattened to RGB first since JPEG has no alpha
    /// channel; the conversion is silent and deterministic. Repeated calls
    /// without an intervening mutation return byte-identical output.
    pub fn stream(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        match format {
            ImageFormat::Jpeg => {
                let flattened = DynamicImage::ImageRgba8(self.canvas.clone()).to_rgb8();
                flattened.write_to(&mut buffer, format.to_image())
            }
            _ => self.canvas.write_to(&mut buffer, format.to_image()),
        }
        .map_err(|source| AvatarError::Encode { format, source })?;

        let bytes = buffer.into_inner();
        log::debug!("encoded {format} avatar: {} bytes", bytes.len());
        Ok(bytes)
    }

    /// Encodes the current canvas as a base64 data URI
    /// (`data:image/<format>;base64,...`), suitable for an HTML `src`
    /// attribute.
    ///
    /// The payload is the standard base64 encoding of exactly the bytes
    /// [`stream`](Self::stream) returns for the same state.
    pub fn base64_image(&self, format: ImageFormat) -> Result<String> {
        let encoded = BASE64.encode(self.stream(format)?);
        Ok(format!("data:image/{};base64,{encoded}", format.name()))
    }

    /// Encodes the current canvas and writes it to `path`, inferring the
    /// format from the path's extension.
    ///
    /// Existing files are silently overwritten; missing parent directories
    /// are not created.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let bytes = self.stream(format)?;
        std::fs::write(path, &bytes).map_err(|source| AvatarError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved {format} avatar to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{} {}", self.letter, self.size, self.size, self.color)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar(text: &str, options: AvatarOptions) -> Avatar {
        Avatar::with_options(text, options).unwrap()
    }

    #[test]
    fn attributes_after_construction() {
        let avatar = avatar(
            "smallwat3r",
            AvatarOptions::new().with_size(200).with_color((9, 9, 9)),
        );
        assert_eq!(avatar.letter(), 'S');
        assert_eq!(avatar.size(), 200);
        assert_eq!(avatar.rgb(), Rgb::new(9, 9, 9));
        assert_eq!(avatar.color(), &ColorSpec::Rgb(Rgb::new(9, 9, 9)));
    }

    #[test]
    fn capitalize_flag_is_honored() {
        let avatar = avatar("smallwat3r", AvatarOptions::new().with_capitalize(false));
        assert_eq!(avatar.letter(), 's');
    }

    #[test]
    fn empty_identity_fails_construction() {
        for bad in ["", "   "] {
            let err = Avatar::new(bad).unwrap_err();
            assert!(matches!(err, AvatarError::InvalidInput(_)));
        }
    }

    #[test]
    fn zero_size_fails_construction() {
        let err = Avatar::with_options("x", AvatarOptions::new().with_size(0)).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidInput(_)));
    }

    #[test]
    fn malformed_color_fails_construction() {
        let err =
            Avatar::with_options("x", AvatarOptions::new().with_color("#12345")).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidColor(_)));
    }

    #[test]
    fn missing_font_fails_construction() {
        let err = Avatar::with_options(
            "x",
            AvatarOptions::new().with_font("no/such/font.ttf"),
        )
        .unwrap_err();
        assert!(matches!(err, AvatarError::FontLoad { .. }));
    }

    #[test]
    fn end_to_end_composition() {
        let avatar = avatar(
            "alice",
            AvatarOptions::new().with_size(100).with_color((10, 20, 30)),
        );
        assert_eq!(avatar.letter(), 'A');
        assert_eq!(avatar.canvas().dimensions(), (100, 100));
        assert_eq!(avatar.canvas().get_pixel(0, 0).0, [10, 20, 30, 255]);

        let png = avatar.stream(ImageFormat::Png).unwrap();
        assert_eq!(&png[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn stream_is_idempotent() {
        let avatar = avatar("bob", AvatarOptions::new().with_color("#336699"));
        let first = avatar.stream(ImageFormat::Png).unwrap();
        let second = avatar.stream(ImageFormat::Png).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_format_decodes_to_the_canvas_dimensions() {
        let avatar = avatar(
            "carol",
            AvatarOptions::new().with_size(64).with_color((40, 80, 120)),
        );
        for format in ImageFormat::ALL {
            let bytes = avatar.stream(format).unwrap();
            let decoded = image::load_from_memory(&bytes)
                .unwrap_or_else(|e| panic!("{format} should decode: {e}"));
            assert_eq!(decoded.width(), 64, "{format}");
            assert_eq!(decoded.height(), 64, "{format}");
        }
    }

    #[test]
    fn jpeg_flattens_to_rgb() {
        let avatar = avatar("dave", AvatarOptions::new().with_size(80));
        let bytes = avatar.stream(ImageFormat::Jpeg).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn base64_image_matches_stream_bytes() {
        use base64::Engine as _;

        let avatar = avatar("erin", AvatarOptions::new().with_color((1, 2, 3)));
        let uri = avatar.base64_image(ImageFormat::Png).unwrap();

        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(decoded, avatar.stream(ImageFormat::Png).unwrap());
    }

    #[test]
    fn base64_image_names_the_format() {
        let avatar = avatar("frank", AvatarOptions::new());
        let uri = avatar.base64_image(ImageFormat::Jpeg).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn change_color_recomposes_the_canvas() {
        let mut avatar = avatar(
            "grace",
            AvatarOptions::new().with_size(50).with_color((0, 0, 0)),
        );
        assert_eq!(avatar.canvas().get_pixel(0, 0).0, [0, 0, 0, 255]);

        avatar.change_color((200, 100, 50)).unwrap();
        assert_eq!(avatar.rgb(), Rgb::new(200, 100, 50));
        assert_eq!(avatar.canvas().get_pixel(0, 0).0, [200, 100, 50, 255]);
    }

    #[test]
    fn hex_color_reads_back_as_hex() {
        let mut avatar = avatar("heidi", AvatarOptions::new().with_color((1, 1, 1)));
        avatar.change_color("#999999").unwrap();
        assert_eq!(avatar.color(), &ColorSpec::Hex("#999999".into()));
        assert_eq!(avatar.rgb(), Rgb::new(0x99, 0x99, 0x99));
    }

    #[test]
    fn invalid_color_change_leaves_the_canvas_alone() {
        let mut avatar = avatar("ivan", AvatarOptions::new().with_color((5, 5, 5)));
        let err = avatar.change_color("#FFF").unwrap_err();
        assert!(matches!(err, AvatarError::InvalidColor(_)));
        assert_eq!(avatar.rgb(), Rgb::new(5, 5, 5));
        assert_eq!(avatar.canvas().get_pixel(0, 0).0, [5, 5, 5, 255]);
    }

    #[test]
    fn randomize_color_changes_the_color() {
        let mut avatar = avatar("judy", AvatarOptions::new().with_seed(42));
        let first = avatar.rgb();
        avatar.randomize_color();
        let second = avatar.rgb();
        assert_ne!(first, second);
        assert_eq!(
            avatar.canvas().get_pixel(0, 0).0,
            [second.r, second.g, second.b, 255]
        );
    }

    #[test]
    fn seeded_avatars_are_reproducible() {
        let options = AvatarOptions::new().with_seed(7);
        let a = avatar("kim", options.clone());
        let b = avatar("kim", options);
        assert_eq!(a.rgb(), b.rgb());
        assert_eq!(
            a.stream(ImageFormat::Png).unwrap(),
            b.stream(ImageFormat::Png).unwrap()
        );
    }

    #[test]
    fn save_writes_a_decodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.png");

        let avatar = avatar("liam", AvatarOptions::new().with_size(90));
        avatar.save(&path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 90);
    }

    #[test]
    fn save_rejects_unknown_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let avatar = avatar("mary", AvatarOptions::new());

        let err = avatar.save(dir.path().join("test.nope")).unwrap_err();
        assert!(matches!(err, AvatarError::UnsupportedFormat(_)));
    }

    #[test]
    fn save_wraps_io_failures() {
        let dir = tempfile::tempdir().unwrap();
        let avatar = avatar("nina", AvatarOptions::new());

        // Parent directory does not exist and is not created.
        let err = avatar
            .save(dir.path().join("missing/sub/test.png"))
            .unwrap_err();
        assert!(matches!(err, AvatarError::FileWrite { .. }));
    }

    #[test]
    fn display_formats_letter_size_and_color() {
        let avatar = avatar(
            "olga",
            AvatarOptions::new().with_size(100).with_color((10, 20, 30)),
        );
        assert_eq!(avatar.to_string(), "O 100x100 (10, 20, 30)");
    }
}
