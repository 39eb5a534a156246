use super::{author, dataset};
use crate::gallery::{LayoutOptions, layout_gallery};
use crate::svg::{SvgRenderOptions, render_gallery_svg};
use asterplot_core::University;
use asterplot_core::topics::{LOW_VOLUME_COLOR, STROKE_COLOR, TOPIC_NAMES};

fn render(ds: &asterplot_core::Dataset) -> String {
    let layout = layout_gallery(ds, &LayoutOptions::default()).unwrap();
    render_gallery_svg(&layout, &SvgRenderOptions::default())
}

#[test]
fn emits_a_standalone_svg_document() {
    let ds = dataset(vec![author(
        "ada",
        "Ada Lovelace",
        University::Cambridge,
        false,
        0.5,
    )]);
    let svg = render(&ds);
    assert!(svg.starts_with(r#"<svg id="asterplot""#));
    assert!(svg.contains(r#"viewBox="0 0 "#));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn every_solid_slice_carries_a_topic_tooltip() {
    let ds = dataset(vec![author(
        "ada",
        "Ada Lovelace",
        University::Cambridge,
        false,
        0.5,
    )]);
    let svg = render(&ds);
    for name in TOPIC_NAMES {
        // Topic names appear in the legend and as slice tooltips.
        assert!(
            svg.contains(&format!("<title>{name}</title>")),
            "missing tooltip for {name}"
        );
    }
    assert_eq!(svg.matches("<title>").count(), TOPIC_NAMES.len());
}

#[test]
fn charts_are_tagged_with_their_slot() {
    let ds = dataset(vec![
        author("ada", "Ada Lovelace", University::Cambridge, false, 0.5),
        author("jean", "Jean Paul Sartre", University::Ucl, false, 0.5),
    ]);
    let svg = render(&ds);
    assert!(svg.contains(r#"data-slot="C1""#));
    assert!(svg.contains(r#"data-slot="U1""#));
}

#[test]
fn name_labels_are_rendered_as_stacked_text() {
    let ds = dataset(vec![author(
        "jean",
        "Jean Paul Sartre",
        University::Ucl,
        false,
        0.5,
    )]);
    let svg = render(&ds);
    assert!(svg.contains(r#"<text class="asterLabel" dy="0.01em">Jean Paul</text>"#));
    assert!(svg.contains(r#"<text class="asterLabel" dy="1.3em">Sartre</text>"#));
}

#[test]
fn low_volume_charts_are_filled_grey() {
    let ds = dataset(vec![author(
        "jean",
        "Jean Paul Sartre",
        University::Ucl,
        true,
        0.5,
    )]);
    let svg = render(&ds);
    let expected = format!(r#"class="solidArc" fill="{LOW_VOLUME_COLOR}""#);
    assert_eq!(svg.matches(expected.as_str()).count(), TOPIC_NAMES.len());
}

#[test]
fn text_content_is_xml_escaped() {
    let ds = dataset(vec![author(
        "amp",
        "A&B Smith",
        University::Oxford,
        false,
        0.5,
    )]);
    let svg = render(&ds);
    assert!(svg.contains("A&amp;B"));
    assert!(!svg.contains(">A&B<"));
}

#[test]
fn arc_strokes_use_the_shared_stroke_color() {
    let ds = dataset(vec![author(
        "ada",
        "Ada Lovelace",
        University::Cambridge,
        false,
        0.5,
    )]);
    let svg = render(&ds);
    assert!(svg.contains(&format!(".solidArc{{stroke:{STROKE_COLOR};")));
    assert!(svg.contains(&format!(".outlineArc{{fill:none;stroke:{STROKE_COLOR};")));
}

#[test]
fn rendering_is_byte_identical_across_runs() {
    let ds = dataset(vec![
        author("ada", "Ada Lovelace", University::Cambridge, false, 0.5),
        author("jean", "Jean Paul Sartre", University::Ucl, true, 0.25),
    ]);
    assert_eq!(render(&ds), render(&ds));
}

#[test]
fn custom_diagram_id_namespaces_the_css() {
    let ds = dataset(vec![author(
        "ada",
        "Ada Lovelace",
        University::Cambridge,
        false,
        0.5,
    )]);
    let layout = layout_gallery(&ds, &LayoutOptions::default()).unwrap();
    let svg = render_gallery_svg(
        &layout,
        &SvgRenderOptions {
            diagram_id: Some("gallery-1".to_string()),
        },
    );
    assert!(svg.starts_with(r#"<svg id="gallery-1""#));
    assert!(svg.contains("#gallery-1 .solidArc"));
}
