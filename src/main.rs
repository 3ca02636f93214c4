use {
    gallivant::{
        count_loop_inducing_obstructions, open_utf8_file, Args, Parser, Patrol, PatrolMap,
        PatrolOutcome,
    },
    std::process::exit,
};

fn main() {
    let args: Args = Args::parse();
    let file_path: &str = args.input_file_path("input.txt");

    // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're done
    // parsing it
    let exit_code: i32 = unsafe {
        open_utf8_file(file_path, |map_str: &str| match PatrolMap::try_from(map_str) {
            Ok(map) => {
                let mut patrol: Patrol = Patrol::new(&map);

                match patrol.run() {
                    PatrolOutcome::Exited { distinct_positions } => {
                        println!("distinct positions visited: {distinct_positions}");
                    }
                    PatrolOutcome::Looped => {
                        println!("the guard never leaves the unmodified map");
                    }
                }

                if args.verbose {
                    println!("{}", patrol.route_string());
                }

                println!(
                    "loop-inducing obstructions: {}",
                    count_loop_inducing_obstructions(&map)
                );

                0_i32
            }
            Err(error) => {
                eprintln!("Failed to parse map from \"{file_path}\":\n{error:#?}");

                1_i32
            }
        })
    }
    .unwrap_or_else(|error| {
        eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

        1_i32
    });

    exit(exit_code);
}
