use daypart::{Day, Operation, Partition, PeriodRequest};

fn show(title: &str, partition: &Partition) {
    println!("── {title}");
    println!("{partition}");
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=daypart=debug shows the placement chosen for every edit.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let today = Day::ymd(2026, 10, 17)?;
    let mut partition = Partition::default();
    show("Start", &partition);

    let h1 = PeriodRequest::parse("2020-01-01", "2020-06-30")?.validate(today)?;
    println!("confirm overlap? {}", partition.check_overlap(&h1));
    partition = partition.apply(Operation::Add { candidate: h1 });
    show("Add first half of 2020", &partition);

    let spill = PeriodRequest::parse("2020-05-01", "2021-01-01")?.validate(today)?;
    println!("confirm overlap? {}", partition.check_overlap(&spill));
    partition = partition.apply(Operation::Add { candidate: spill });
    show("Add a period spilling into the open end", &partition);

    let options: Vec<String> = partition.to_options().iter().map(Day::label).collect();
    println!("\"to\" choices: {}", options.join(", "));
    println!();

    partition = partition.apply(Operation::Delete { index: 1 });
    show("Delete the middle period", &partition);

    partition.validate()?;
    Ok(())
}
