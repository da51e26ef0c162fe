use fillers_core::{Report, Show};

fn main() {
    // Three seasons: episodes 1-5, 6-8 and 9-12
    let show = Show::from_absolute(vec![5, 3, 4], [2, 3, 6, 7, 8, 12]);

    println!("Filler episodes (absolute): {:?}", show.fillers());
    println!("Compressed: {:?}\n", show.fillers_compressed());

    for season in show.seasons() {
        println!(
            "Season {}: episodes {:?} -> {}",
            season.number(),
            season.absolute_episodes(),
            season.instruction()
        );
    }

    let report = Report::from_show(&show).with_title("Sample Show");
    println!("\n{}\n", report.to_console());
    println!("{}", report.to_markdown());
}
