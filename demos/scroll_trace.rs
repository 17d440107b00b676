use prllx::{BasicRule, MemoryDocument, Parallax, ParallaxOptions, Vec2};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/landing.json");
    let doc = MemoryDocument::from_reader(s.as_bytes())?;
    let ids: Vec<_> = ["hero-bg", "card", "banner", "badge"]
        .into_iter()
        .filter_map(|name| doc.find(name).map(|id| (name, id)))
        .collect();

    let mut parallax = Parallax::new(doc, ParallaxOptions::default())?;
    parallax.add_rule(BasicRule::default())?;
    parallax.set_viewport(1280.0, 800.0)?;
    parallax.init()?;

    for pos in (0..=1600).step_by(200) {
        let pos = f64::from(pos);
        parallax.document_mut().set_scroll(Vec2::new(0.0, pos));
        parallax.set_current(pos)?;

        println!("scroll {pos}:");
        for (name, id) in &ids {
            let doc = parallax.document();
            let state = if doc.has_class(*id, "u-hidden") { "hidden" } else { "shown" };
            let transform = doc.transform_css(*id).unwrap_or_else(|| "none".to_owned());
            println!("  {name:<8} {state:<6} {transform}");
        }
    }

    let doc = parallax.destroy()?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
