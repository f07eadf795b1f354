use std::error::Error;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use event_manager::client::Client;
use event_manager::controller::Controller;
use event_manager::draft::Field;
use event_manager::event::EventId;
use event_manager::render;

static HELP: &str = "\
Commands:
  list                    show the events and the forms
  refresh                 fetch the events again
  new <field> <value>     fill the \"new event\" form (fields: name, description, date)
  add                     create an event from the \"new event\" form
  edit <n>                edit the n-th event
  set <field> <value>     fill the \"edit event\" form
  update                  save the edited event
  cancel                  stop editing
  delete <n>              delete the n-th event
  help                    show this help
  quit                    exit";


#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    if let Some(url) = std::env::args().nth(1) {
        event_manager::config::set_base_url(url);
    }

    let client = Client::from_config()?;
    log::info!("Using server {}", client.base_url());
    let mut controller = Controller::new(client);

    // The list is fetched once at startup, then after every change
    controller.load().await;
    display(&mut controller, true);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let line = match lines.next_line().await? {
            None => break,
            Some(line) => line,
        };

        let mut words = line.trim().splitn(3, ' ');
        let command = words.next().unwrap_or_default();
        let first = words.next();
        let rest = words.next().unwrap_or_default();

        let show_view = match command {
            "" => false,
            "quit" | "exit" => break,
            "help" => { println!("{}", HELP); false },
            "list" => true,
            "refresh" => { controller.load().await; true },
            "new" => match parse_field(first) {
                Some(field) => { controller.set_new_field(field, rest); true },
                None => false,
            },
            "add" => { controller.create().await; true },
            "edit" => match nth_event(&controller, first) {
                Some(id) => controller.begin_edit_by_id(&id),
                None => false,
            },
            "set" => match parse_field(first) {
                Some(field) if controller.state().is_editing() => { controller.set_edit_field(field, rest); true },
                Some(_) => { println!("Not editing any event, use `edit <n>` first"); false },
                None => false,
            },
            "update" => { controller.update().await; true },
            "cancel" => { controller.cancel_edit(); true },
            "delete" => match nth_event(&controller, first) {
                Some(id) => { controller.delete(&id).await; true },
                None => false,
            },
            other => { println!("Unknown command {:?}. Type `help` for the list of commands", other); false },
        };

        display(&mut controller, show_view);
    }

    Ok(())
}

fn display(controller: &mut Controller<Client>, show_view: bool) {
    for notification in controller.take_notifications() {
        println!("{}", render::render_notification(&notification));
    }
    if show_view {
        println!("{}", render::render_view(controller.state()));
    }
}

fn parse_field(word: Option<&str>) -> Option<Field> {
    match word.map(|w| w.parse::<Field>()) {
        None => {
            println!("Missing field name (name, description or date)");
            None
        },
        Some(Err(err)) => {
            println!("{}", err);
            None
        },
        Some(Ok(field)) => Some(field),
    }
}

/// Turns a 1-based position in the displayed list into an event ID
fn nth_event(controller: &Controller<Client>, word: Option<&str>) -> Option<EventId> {
    let n = match word.map(|w| w.parse::<usize>()) {
        Some(Ok(n)) if n > 0 => n,
        _ => {
            println!("Expected the number of an event, as displayed in the list");
            return None;
        },
    };
    match controller.events().get(n - 1) {
        None => {
            println!("There is no event #{}", n);
            None
        },
        Some(event) => Some(event.id().clone()),
    }
}
