use anyhow::Result;
use clap::Parser;
use coffee_patterns::cli::{self, DemoArgs};
use coffee_patterns::structural::composite::FileSystem;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "composite", about = "Composite: a directory/file tree")]
struct Cli {
    #[command(flatten)]
    common: DemoArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::bootstrap(&cli.common)?;

    let mut fs = FileSystem::new();
    let document = fs.add_file("Document.txt");
    let photo = fs.add_file("Photo.jpg");
    let presentation = fs.add_file("Presentation.pptx");

    let documents = fs.add_directory("Documents");
    let photos = fs.add_directory("Photos");
    let root = fs.add_directory("Root");

    fs.add(documents, document)?;
    fs.add(photos, photo)?;
    fs.add(photos, presentation)?;
    fs.add(root, documents)?;
    fs.add(root, photos)?;

    println!("{}", "Filesystem Structure:".bold());
    println!("{}\n", fs.show_details(root)?);

    fs.remove(photos, photo);
    println!("{}", "Updated Filesystem Structure after removing Photo.jpg:".bold());
    println!("{}\n", fs.show_details(root)?);

    let readme = fs.add_file("Readme.txt");
    fs.add(root, readme)?;
    println!("{}", "Updated Filesystem Structure after adding Readme.txt:".bold());
    println!("{}\n", fs.show_details(root)?);

    Ok(())
}
