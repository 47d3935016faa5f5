//! Structural stylesheet for the generated site.
//!
//! Covers the class names the components and page templates emit. Visual
//! polish beyond structure (animation, gradients on scroll, etc.) belongs to
//! whatever styling layer the deployment adds on top.

use crate::theme::SiteTheme;

pub fn generate_site_css(theme: &SiteTheme) -> String {
    let light = &theme.light;
    let dark = &theme.dark;
    let accent = &theme.accent;
    let fonts = &theme.fonts;
    let spacing = &theme.spacing;

    format!(
        r#"/* CSS Reset */
*, *::before, *::after {{
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}}

:root {{
    --page-background-color: {light_background};
    --page-foreground-color: {light_foreground};
    --link-color: {light_link};
    --link-color-stop-1: {accent_1};
    --link-color-stop-2: {accent_2};
    --link-color-stop-3: {accent_3};

    --font-body: {font_body};
    --font-heading: {font_heading};
    --font-mono: {font_mono};

    --base-font-size: {base_font_size};
    --line-height: {line_height};
    --measure: {measure};
}}

@media screen and (prefers-color-scheme: dark) {{
    :root {{
        --page-background-color: {dark_background};
        --page-foreground-color: {dark_foreground};
        --link-color: {dark_link};
    }}
}}

body {{
    background: var(--page-background-color);
    color: var(--page-foreground-color);
    font-family: var(--font-body);
    font-size: var(--base-font-size);
    line-height: var(--line-height);
}}

h1, h2, h3, h4, h5, h6 {{
    font-family: var(--font-heading);
    line-height: 1.4;
    margin: 2em 0 0.5em 0;
}}

a {{
    color: var(--link-color);
}}

/* Post body */

.post-body {{
    max-width: var(--measure);
    margin: 0 auto;
    padding: 3em 0;
}}

.post-body > p {{
    margin-bottom: 1em;
}}

.post-body > p:last-child:empty {{
    display: none;
}}

.post-quote {{
    border-left: 6px solid var(--post-complementary-color);
    background: linear-gradient(
        to right,
        var(--post-color-0_3) 0%,
        var(--post-color-0_15) 25%,
        var(--post-color-0_0) 100%
    );
    padding: 1em 2em;
    margin: 2em 0;
}}

.quote-bubble {{
    border-radius: 1em;
    font-style: italic;
    padding: 1em 2em;
    margin: 1em 0 0.5em 0;
}}

.post-emphasis {{
    display: block;
    font-weight: 100;
    font-size: 1.5em;
    font-style: normal;
    margin: 2em 0;
    line-height: 1.3;
}}

.post-image {{
    max-width: 100%;
    margin: 1em auto;
    display: block;
    border-radius: 0.3em;
}}

.post-video {{
    width: 100%;
}}

.video-embed iframe {{
    width: 100%;
    aspect-ratio: 16 / 9;
    border: 0;
}}

.source-code pre {{
    font-family: var(--font-mono);
    overflow-x: auto;
    padding: 1em;
    border-radius: 0.3em;
    background: rgba(0, 0, 0, 0.08);
}}

.image-gallery {{
    position: relative;
    z-index: 0;
}}

.gallery-title {{
    text-align: center;
}}

.post-body hr {{
    border-color: rgba(0, 0, 0, 0.15);
    margin: 3em 0;
}}

/* Feed */

.stories-list {{
    max-width: 600px;
    margin: 0 auto;
}}

.post-preview {{
    border-radius: 0.5em;
    margin-bottom: 1.5em;
    border-left: var(--cover-image-border-width, 6px) solid var(--post-color, var(--link-color));
}}

.post-preview-link {{
    display: block;
    color: inherit;
    text-decoration: none;
    padding: 1em;
}}

.post-preview-cover {{
    max-width: 100%;
    border-radius: 0.3em;
}}

.post-preview-meta {{
    opacity: 0.7;
    font-size: 0.85em;
}}

.post-author {{
    display: inline-flex;
    align-items: center;
    gap: 0.5em;
}}

.post-author-avatar {{
    border-radius: 10em;
}}

/* Home */

.home-card {{
    display: grid;
    place-items: center;
    min-height: 100vh;
    text-align: center;
}}

.home-card-text {{
    margin: 0 auto;
    max-width: 60ch;
    width: 91%;
}}

.portrait {{
    margin: 1.5em auto 0 auto;
    width: 30vmin;
    height: 30vmin;
    max-width: 288px;
    max-height: 288px;
    border-radius: 10em;
}}

.portrait img {{
    width: inherit;
    height: inherit;
    max-width: inherit;
    max-height: inherit;
    border-radius: inherit;
}}

.biography h1 {{
    margin: 0.5em 0 0 0;
    letter-spacing: -0.06em;
}}

.pill-button {{
    display: inline-block;
    border-radius: 100em;
    padding: 0.5em 1.5em;
    background: var(--link-color);
    color: var(--page-background-color);
    text-decoration: none;
}}

.typewriter-segment[data-backspace] {{
    white-space: pre-wrap;
}}

/* Footer */

.app-footer {{
    background: #000;
    color: rgba(255, 255, 255, 0.85);
    margin-top: 7em;
    padding: 2em 0;
}}

.app-footer > div {{
    display: flex;
    flex-direction: row;
    align-items: center;
    justify-content: space-between;
    max-width: var(--measure);
    margin: 0 auto;
}}
"#,
        light_background = light.background,
        light_foreground = light.foreground,
        light_link = light.link,
        dark_background = dark.background,
        dark_foreground = dark.foreground,
        dark_link = dark.link,
        accent_1 = accent.stop_1,
        accent_2 = accent.stop_2,
        accent_3 = accent.stop_3,
        font_body = fonts.body,
        font_heading = fonts.heading,
        font_mono = fonts.monospace,
        base_font_size = spacing.base_font_size,
        line_height = spacing.line_height,
        measure = spacing.measure,
    )
}
