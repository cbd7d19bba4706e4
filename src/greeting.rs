use crate::domain::Notifier;

pub const WELCOME_MESSAGE: &str = "Welcome to the Simple Banking System!";

pub fn print_welcome_message() {
    println!("{}", WELCOME_MESSAGE);
}

pub fn welcome<N: Notifier + ?Sized>(notifier: &mut N) {
    notifier.notify(WELCOME_MESSAGE);
}
