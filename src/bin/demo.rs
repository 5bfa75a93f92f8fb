//! A minimal demo: fetch a task list, show the week strip and the tasks for today.
//!
//! Pass the endpoint URL (and optionally a username and password) on the command line.
//! Set the RUST_LOG environment variable to display more info about the load.

use week_planner::client::Client;
use week_planner::planner::feedback_channel;
use week_planner::PlannerController;

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let url = args.next().unwrap_or_else(|| "http://localhost:8000/tasks".to_string());
    let username = args.next().unwrap_or_default();
    let password = args.next().unwrap_or_default();

    let client = Client::new(&url, username, password).unwrap();
    let today = chrono::Local::now().date_naive();

    let (sender, receiver) = feedback_channel();
    let mut planner = PlannerController::new_with_feedback_channel(client, today, sender);

    if planner.load().await == false {
        println!("Could not load tasks from {}, starting empty.", url);
    }
    println!("{}", *receiver.borrow());

    for day in planner.week_days().iter() {
        let marker = if day.selected() { ">" } else { " " };
        println!("{} {}", marker, day.date());
    }

    println!("\nTasks for {}:", planner.selected_date());
    for task in planner.visible_tasks() {
        let state = if task.done() { "x" } else { " " };
        println!("  [{}] {} ({})", state, task.title(), task.tag());
    }
}
