// Color constants
pub const PRIMARY_COLOR: &str = "#A855F7";
pub const PRIMARY_DARK: &str = "#7E22CE";
pub const ACCENT_COLOR: &str = "#EC4899";
pub const TEXT_COLOR: &str = "#1F2937";
pub const TEXT_MUTED: &str = "#6B7280";
pub const BORDER_COLOR: &str = "#F3E8FF";
pub const DANGER_COLOR: &str = "#EF4444";

// Spacing constants, in px
pub const PAD_SM: u32 = 8;
pub const PAD_MD: u32 = 16;
pub const PAD_LG: u32 = 32;
pub const BORDER_RADIUS: u32 = 16;

/// The single stylesheet inlined into every page.
pub fn stylesheet() -> String {
    format!(
        r#"
*,*::before,*::after{{box-sizing:border-box}}
body{{margin:0;font-family:Inter,system-ui,sans-serif;color:{TEXT_COLOR};background:linear-gradient(135deg,#FAF5FF,#FDF2F8 50%,#FFF)}}
a{{color:inherit;text-decoration:none}}
.shell-header,.shell-footer{{display:flex;align-items:center;justify-content:space-between;padding:{PAD_MD}px {PAD_LG}px}}
.shell-footer{{color:{TEXT_MUTED};font-size:.875rem;justify-content:center}}
.brand{{font-weight:700;color:{PRIMARY_DARK};display:flex;gap:{PAD_SM}px;align-items:center}}
main{{max-width:72rem;margin:0 auto;padding:{PAD_LG}px {PAD_MD}px}}
h1{{font-size:2.25rem;margin:0 0 {PAD_MD}px}}
.lead{{color:{TEXT_MUTED};font-size:1.125rem;max-width:42rem;margin:0 auto}}
.center{{text-align:center}}
.card{{background:#FFF;border:1px solid {BORDER_COLOR};border-radius:{BORDER_RADIUS}px;box-shadow:0 20px 25px -5px rgba(0,0,0,.1);padding:{PAD_LG}px;margin-bottom:{PAD_LG}px}}
.icon{{width:1.25rem;height:1.25rem;vertical-align:middle}}
.icon-lg{{width:2rem;height:2rem;color:{PRIMARY_COLOR}}}
.icon-xl{{width:4rem;height:4rem}}
.btn{{display:inline-flex;align-items:center;gap:{PAD_SM}px;border:0;border-radius:9999px;padding:{PAD_SM}px {PAD_MD}px;font:inherit;font-weight:600;cursor:pointer}}
.btn-primary{{background:linear-gradient(90deg,{PRIMARY_COLOR},{ACCENT_COLOR});color:#FFF}}
.btn-secondary{{background:#FFF;color:{PRIMARY_DARK};border:1px solid {PRIMARY_COLOR}}}
.actions{{display:flex;flex-wrap:wrap;gap:{PAD_MD}px;margin-top:{PAD_LG}px;padding-top:{PAD_MD}px;border-top:1px solid #F3F4F6}}
.spinner{{display:inline-block;width:4rem;height:4rem;border:4px solid {PRIMARY_COLOR};border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite}}
@keyframes spin{{to{{transform:rotate(360deg)}}}}
.tips{{background:linear-gradient(90deg,#FAF5FF,#FDF2F8);border-radius:12px;padding:{PAD_MD}px {PAD_LG}px}}
.tips ul{{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:{PAD_SM}px;padding-left:1.25rem;color:{TEXT_MUTED}}}
.features{{display:grid;grid-template-columns:repeat(auto-fit,minmax(16rem,1fr));gap:{PAD_MD}px}}
.feature .badge{{display:flex;align-items:center;justify-content:center;width:4rem;height:4rem;border-radius:50%;background:#FAF5FF;margin-bottom:{PAD_MD}px}}
.capture-widget{{display:flex;flex-direction:column;gap:{PAD_MD}px;align-items:center}}
.capture-widget textarea{{width:100%;min-height:6rem;font-family:monospace}}
.error{{color:{DANGER_COLOR};font-weight:600}}
.studio{{display:grid;grid-template-columns:1fr 2fr;gap:{PAD_LG}px}}
@media (max-width:64rem){{.studio{{grid-template-columns:1fr}}}}
.pill{{display:inline-flex;align-items:center;gap:{PAD_SM}px;background:#FFF;border-radius:9999px;padding:{PAD_SM}px {PAD_MD}px;color:{PRIMARY_DARK};box-shadow:0 4px 6px rgba(0,0,0,.08)}}
.categories{{display:flex;flex-direction:column;gap:{PAD_SM}px}}
.category{{display:block;padding:{PAD_MD}px;border-radius:{BORDER_RADIUS}px;border:1px solid #F3F4F6}}
.category p{{margin:{PAD_SM}px 0 0;font-size:.875rem;color:{TEXT_MUTED}}}
.category.selected{{background:linear-gradient(90deg,{PRIMARY_COLOR},{ACCENT_COLOR});color:#FFF;border-color:transparent}}
.category.selected p{{color:rgba(255,255,255,.8)}}
.preview img{{width:100%;border-radius:12px;object-fit:contain}}
.shade-header{{display:flex;justify-content:space-between;align-items:center;margin-top:{PAD_LG}px}}
.swatches{{display:flex;flex-wrap:wrap;gap:{PAD_SM}px}}
.swatch{{display:block;width:3rem;height:3rem;border-radius:50%;border:2px solid #FFF;box-shadow:0 0 0 1px #E5E7EB}}
.swatch.selected{{box-shadow:0 0 0 3px {PRIMARY_COLOR}}}
.notice{{max-width:28rem;margin:{PAD_LG}px auto;text-align:center}}
.notice .icon-xl{{color:{DANGER_COLOR}}}
"#
    )
}
