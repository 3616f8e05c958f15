/// Quickstart example - the simplest possible usage
use json2dataclass::{backend, CodeGenerator, GeneratorConfig, SchemaBuilder};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    println!("=== json2dataclass Quick Start ===\n");

    // Step 1: A few responses from an undocumented API
    let samples = vec![
        json!({
            "id": 1,
            "username": "alice",
            "posts": [
                {"id": 100, "title": "My First Post", "tags": ["intro"]},
                {"id": 101, "title": "Second Post", "draft": true}
            ]
        }),
        json!({
            "id": 2,
            "username": "bob",
            "profile": {"bio": "hi", "links": {"home": "https://bob.dev"}}
        }),
    ];

    // Step 2: Merge them into one schema
    let mut builder = SchemaBuilder::new();
    builder.add_values(&samples);
    let schema = builder.build();

    println!("Inferred schema:");
    println!("{}", json2dataclass::schema::describe(&schema));

    // Step 3: Generate classes for every backend
    let generator = CodeGenerator::new(GeneratorConfig::default());
    for backend in backend::backends() {
        let classes = generator.generate(&schema, backend.translator());
        println!("--- {} ({} classes) ---", backend.name(), classes.len());
        println!("{}", backend.renderer().render(&classes));
    }

    Ok(())
}
