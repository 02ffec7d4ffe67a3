use crate::filter::chain::{ChainMode, FilterChainBuilder, vignette};
use crate::filter::expr::{Filter, FilterArg, FilterExpression};
use crate::filter::graph::{FilterGraph, PadLabel};
use crate::foundation::core::{even_floor, scaled_even};
use crate::foundation::error::{CompileError, CompileResult};
use crate::media::info::MediaInfo;
use crate::params::model::ParameterSet;

/// Pixel sizes of the canvas composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasGeometry {
    /// Source (and output) frame width.
    pub frame_w: u32,
    /// Source (and output) frame height.
    pub frame_h: u32,
    /// Scaled-down foreground width (even).
    pub fg_w: u32,
    /// Scaled-down foreground height (even).
    pub fg_h: u32,
    /// Zoomed background width before the crop-back (even).
    pub bg_w: u32,
    /// Zoomed background height before the crop-back (even).
    pub bg_h: u32,
    /// Crop-back width: the even source width, never wider than the background.
    pub crop_w: u32,
    /// Crop-back height: the even source height, never taller than the background.
    pub crop_h: u32,
}

impl CanvasGeometry {
    /// Compute the foreground/background sizes for a `width x height` frame.
    pub fn compute(width: u32, height: u32, scale: f64, zoom: f64) -> CompileResult<Self> {
        if width == 0 || height == 0 {
            return Err(CompileError::unsupported_state(
                "canvas needs known media dimensions",
            ));
        }
        let bg_w = scaled_even(width, zoom);
        let bg_h = scaled_even(height, zoom);
        let g = Self {
            frame_w: width,
            frame_h: height,
            fg_w: scaled_even(width, scale),
            fg_h: scaled_even(height, scale),
            bg_w,
            bg_h,
            crop_w: even_floor(width).min(bg_w),
            crop_h: even_floor(height).min(bg_h),
        };
        if g.fg_w == 0 || g.fg_h == 0 || g.crop_w == 0 || g.crop_h == 0 {
            return Err(CompileError::graph(format!(
                "canvas dimensions collapsed to zero (fg {}x{}, bg {}x{}, crop {}x{})",
                g.fg_w, g.fg_h, g.bg_w, g.bg_h, g.crop_w, g.crop_h
            )));
        }
        Ok(g)
    }
}

/// Rounded-corner alpha mask for the foreground.
///
/// Each corner owns an `zone x zone` square. Inside it a pixel is opaque only when it
/// lies within `radius` of the circle center placed `radius` pixels in from both
/// outer edges; everything outside the four squares is opaque. Zones are not clamped,
/// so large zones on small frames overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CornerMask {
    /// Circle radius in pixels.
    pub radius: u32,
    /// Corner zone edge length in pixels.
    pub zone: u32,
}

impl CornerMask {
    /// Mask for `radius` with zone `round(radius * smooth)`; `None` when radius is 0.
    pub fn new(radius: u32, smooth: f64) -> Option<Self> {
        if radius == 0 {
            return None;
        }
        let zone = (f64::from(radius) * smooth).round().max(0.0) as u32;
        Some(Self { radius, zone })
    }

    /// Alpha (0 or 255) of pixel `(x, y)` in a `w x h` frame, evaluated the same way
    /// as the emitted `geq` expression.
    pub fn alpha_at(&self, x: u32, y: u32, w: u32, h: u32) -> u8 {
        let (x, y, w, h) = (f64::from(x), f64::from(y), f64::from(w), f64::from(h));
        let r = f64::from(self.radius);
        let s = f64::from(self.zone);
        let inside = |dx: f64, dy: f64| if dx.hypot(dy) <= r { 255 } else { 0 };

        if x < s && y < s {
            inside(r - x, r - y)
        } else if x > w - s && y < s {
            inside(x - w + r, r - y)
        } else if x < s && y > h - s {
            inside(r - x, y - h + r)
        } else if x > w - s && y > h - s {
            inside(x - w + r, y - h + r)
        } else {
            255
        }
    }

    fn alpha_expr(&self) -> String {
        let r = self.radius;
        let s = self.zone;
        format!(
            "'if(lt(X,{s})*lt(Y,{s}),if(lte(hypot({r}-X,{r}-Y),{r}),255,0),\
             if(gt(X,W-{s})*lt(Y,{s}),if(lte(hypot(X-W+{r},{r}-Y),{r}),255,0),\
             if(lt(X,{s})*gt(Y,H-{s}),if(lte(hypot({r}-X,Y-H+{r}),{r}),255,0),\
             if(gt(X,W-{s})*gt(Y,H-{s}),if(lte(hypot(X-W+{r},Y-H+{r}),{r}),255,0),\
             255))))'"
        )
    }

    /// The `geq` stage: color planes pass through, alpha follows the mask.
    pub fn filter(&self) -> Filter {
        Filter::op(
            "geq",
            vec![
                FilterArg::named("r", "'r(X,Y)'"),
                FilterArg::named("g", "'g(X,Y)'"),
                FilterArg::named("b", "'b(X,Y)'"),
                FilterArg::named("a", self.alpha_expr()),
            ],
        )
    }
}

/// A built canvas graph and the pad carrying the final video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasComposite {
    /// Validated graph.
    pub graph: FilterGraph,
    /// Terminal pad to map as the output video stream.
    pub output: PadLabel,
    /// Sizes used by the graph.
    pub geometry: CanvasGeometry,
}

/// Builds the blurred-background, rounded-foreground composite graph.
#[derive(Clone, Debug)]
pub struct CanvasCompositor<'a> {
    params: ParameterSet,
    media: &'a MediaInfo,
}

impl<'a> CanvasCompositor<'a> {
    /// Compositor over a sanitized copy of `params`.
    pub fn new(params: &ParameterSet, media: &'a MediaInfo) -> Self {
        Self {
            params: params.sanitized(),
            media,
        }
    }

    /// Build the composite.
    ///
    /// `Ok(None)` when the canvas flag is off. Unknown dimensions give
    /// [`CompileError::UnsupportedState`]; a collapsed size or a malformed graph gives
    /// [`CompileError::GraphConstruction`].
    pub fn compose(&self) -> CompileResult<Option<CanvasComposite>> {
        let p = &self.params;
        if !p.canvas_enabled {
            return Ok(None);
        }
        let geo = CanvasGeometry::compute(
            self.media.width,
            self.media.height,
            p.canvas_scale,
            p.canvas_bg_zoom,
        )?;

        let src = PadLabel::source_video();
        let bg = PadLabel::new("bg")?;
        let fg = PadLabel::new("fg")?;
        let bg_out = PadLabel::new("bg_out")?;
        let fg_rounded = PadLabel::new("fg_rounded")?;
        let composed = PadLabel::new("composed")?;

        let mut graph = FilterGraph::new(src.clone());
        graph.push(
            vec![src],
            single(Filter::positional("split", ["2"])),
            vec![bg.clone(), fg.clone()],
        );

        let blur = p.canvas_blur.to_string();
        graph.push(
            vec![bg],
            [
                Filter::positional("scale", [geo.bg_w, geo.bg_h].map(|v| v.to_string())),
                Filter::positional("boxblur", [blur.clone(), blur]),
                Filter::positional("crop", [geo.crop_w, geo.crop_h].map(|v| v.to_string())),
            ]
            .into_iter()
            .collect(),
            vec![bg_out.clone()],
        );

        let mut fg_chain: FilterExpression = [
            Filter::positional("scale", [geo.fg_w, geo.fg_h].map(|v| v.to_string())),
            Filter::positional("format", ["rgba"]),
        ]
        .into_iter()
        .collect();
        if let Some(mask) = CornerMask::new(p.canvas_corner_radius, p.canvas_corner_smooth) {
            fg_chain.push(mask.filter());
        }
        graph.push(vec![fg], fg_chain, vec![fg_rounded.clone()]);

        graph.push(
            vec![bg_out, fg_rounded],
            single(Filter::op(
                "overlay",
                vec![
                    FilterArg::value("(W-w)/2"),
                    FilterArg::value("(H-h)/2"),
                    FilterArg::named("format", "auto"),
                ],
            )),
            vec![composed.clone()],
        );

        let mut current = composed;
        if p.canvas_vignette > 0.0 {
            let next = PadLabel::new("vignette_out")?;
            graph.push(vec![current], single(vignette(p.canvas_vignette)), vec![next.clone()]);
            current = next;
        }
        if p.canvas_noise > 0 {
            let next = PadLabel::new("noise_out")?;
            graph.push(
                vec![current],
                single(Filter::keyed(
                    "noise",
                    [("c0s", p.canvas_noise.to_string()), ("allf", "t".to_string())],
                )),
                vec![next.clone()],
            );
            current = next;
        }
        if let Some(extra) = FilterChainBuilder::new(p, self.media).build(ChainMode::ForegroundOnly)
        {
            let next = PadLabel::new("out")?;
            graph.push(vec![current], extra, vec![next.clone()]);
            current = next;
        }

        graph.validate(&current)?;
        tracing::debug!(
            fg_w = geo.fg_w,
            fg_h = geo.fg_h,
            bg_w = geo.bg_w,
            bg_h = geo.bg_h,
            output = current.name(),
            "built canvas graph"
        );
        Ok(Some(CanvasComposite {
            graph,
            output: current,
            geometry: geo,
        }))
    }
}

fn single(filter: Filter) -> FilterExpression {
    [filter].into_iter().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/filter/canvas.rs"]
mod tests;
