//! # Sketchwire CLI
//!
//! Usage:
//!   sketchwire input.json -o output.svg
//!   echo '{ ... }' | sketchwire -o output.svg
//!   sketchwire --example > login.json

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_login_json());
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .expect("Failed to read stdin");
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "output.svg".to_string());

    // Render
    match sketchwire::render_json(&input) {
        Ok(out) => {
            fs::write(&output_path, &out.svg).expect("Failed to write SVG");
            eprintln!(
                "✓ Written {}x{} SVG ({} bytes) to {}",
                out.width,
                out.height,
                out.svg.len(),
                output_path
            );
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn example_login_json() -> &'static str {
    r##"{
  "kind": { "type": "Page", "title": "Login", "device": "laptop" },
  "children": [
    {
      "kind": { "type": "Header" },
      "children": [
        { "kind": { "type": "Title", "content": "Acme", "level": 3 } },
        { "kind": { "type": "Row" }, "attrs": { "flex": 1 } },
        { "kind": { "type": "Button", "label": "Sign up", "icon": "user" } }
      ]
    },
    {
      "kind": { "type": "Main" },
      "attrs": { "justify": "center", "align": "center" },
      "children": [
        {
          "kind": { "type": "Card", "title": "Welcome back" },
          "children": [
            {
              "kind": { "type": "Input", "label": "Email", "placeholder": "you@example.com" }
            },
            {
              "kind": { "type": "Input", "label": "Password", "placeholder": "••••••••" }
            },
            {
              "kind": { "type": "Row" },
              "attrs": { "justify": "between", "align": "center" },
              "children": [
                { "kind": { "type": "Checkbox", "label": "Remember me" } },
                { "kind": { "type": "Link", "content": "Forgot password?" } }
              ]
            },
            {
              "kind": { "type": "Button", "label": "Log in" },
              "attrs": { "w": "full" }
            }
          ]
        }
      ]
    },
    {
      "kind": { "type": "Footer" },
      "children": [
        { "kind": { "type": "Text", "content": "© 2026 Acme Inc." } }
      ]
    }
  ]
}"##
}
