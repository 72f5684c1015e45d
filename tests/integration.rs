use mybank::app::App;
use mybank::domain::types::{Amount, TransactionKind};
use mybank::domain::Bank;
use mybank::prompt::{Answer, ScriptedPrompt};

fn amount(s: &str) -> Amount {
    Amount::from_str_rounded(s).expect("failed to parse amount")
}

/// Runs a full scripted session and returns the final bank state plus
/// everything the app printed.
fn run_session(answers: Vec<Answer>) -> (Bank, String) {
    let mut app = App::new(Bank::new(), ScriptedPrompt::new(answers), Vec::new());
    app.run().expect("app run failed");
    let (bank, _, out) = app.into_parts();
    let output = String::from_utf8(out).expect("output should be valid UTF-8");
    (bank, output)
}

fn create_account(username: &str, password: &str, balance: &str) -> Vec<Answer> {
    vec![
        Answer::text("Create Account"),
        Answer::text(username),
        Answer::password(password),
        Answer::text(balance),
    ]
}

fn login(username: &str, password: &str) -> Vec<Answer> {
    vec![
        Answer::text("Log In"),
        Answer::text(username),
        Answer::password(password),
    ]
}

#[test]
fn test_alice_scenario() {
    let mut script = create_account("alice", "secret", "100");
    script.extend(login("alice", "secret"));
    script.extend([
        Answer::text("Withdraw"),
        Answer::text("50"),
        Answer::text("Withdraw"),
        Answer::text("100"),
        Answer::text("Deposit"),
        Answer::text("25"),
        Answer::text("Check Balance"),
        Answer::text("Logout"),
        Answer::text("Exit"),
    ]);

    let (bank, output) = run_session(script);

    assert!(output.contains("Withdrawal of $50 successful."));
    assert!(output.contains("Insufficient funds."));
    assert!(output.contains("Deposit of $25 successful."));
    assert!(output.contains("Current balance: $75"));

    let account = &bank.accounts()[0];
    assert_eq!(account.balance(), amount("75"));
    let history: Vec<_> = account
        .transactions()
        .iter()
        .map(|t| (t.kind, t.amount))
        .collect();
    assert_eq!(
        history,
        vec![
            (TransactionKind::Withdrawal, amount("50")),
            (TransactionKind::Deposit, amount("25")),
        ]
    );
}

#[test]
fn test_duplicate_username_rejected() {
    let mut script = create_account("bob", "first", "10");
    script.extend(create_account("bob", "second", "20"));
    script.extend(login("bob", "first"));
    script.extend([
        Answer::text("Check Balance"),
        Answer::text("Logout"),
        Answer::text("Exit"),
    ]);

    let (bank, output) = run_session(script);

    assert!(output.contains("Username already taken."));
    assert_eq!(bank.accounts().len(), 1);
    // The surviving account is the first one
    assert!(output.contains("Current balance: $10"));
}

#[test]
fn test_login_failures_look_identical() {
    let mut script = create_account("alice", "secret", "100");
    script.extend(login("alice", "wrong"));
    script.extend(login("nobody", "secret"));
    script.push(Answer::text("Exit"));

    let (_, output) = run_session(script);

    assert_eq!(
        output
            .matches("Invalid username or password. Please try again.")
            .count(),
        2
    );
    // Neither attempt reached a session menu
    assert!(!output.contains("Logged out."));
}

#[test]
fn test_default_initial_balance_is_zero() {
    let mut script = vec![
        Answer::text("Create Account"),
        Answer::text("carol"),
        Answer::password("pw"),
        Answer::text(""), // accept the default
    ];
    script.push(Answer::text("Exit"));

    let (bank, output) = run_session(script);

    assert!(output.contains("Account created successfully!"));
    assert_eq!(bank.accounts()[0].balance(), Amount::ZERO);
}

#[test]
fn test_negative_initial_balance_rejected() {
    let mut script = create_account("dave", "pw", "-50");
    script.push(Answer::text("Exit"));

    let (bank, output) = run_session(script);

    assert!(output.contains("Initial balance cannot be negative."));
    assert!(bank.accounts().is_empty());
}

#[test]
fn test_negative_deposit_rejected() {
    let mut script = create_account("alice", "secret", "100");
    script.extend(login("alice", "secret"));
    script.extend([
        Answer::text("Deposit"),
        Answer::text("-25"),
        Answer::text("Logout"),
        Answer::text("Exit"),
    ]);

    let (bank, output) = run_session(script);

    assert!(output.contains("Amount must be positive."));
    assert_eq!(bank.accounts()[0].balance(), amount("100"));
    assert!(bank.accounts()[0].transactions().is_empty());
}

#[test]
fn test_transaction_history_statement() {
    let mut script = create_account("alice", "secret", "0");
    script.extend(login("alice", "secret"));
    script.extend([
        Answer::text("Transaction History"),
        Answer::text("Deposit"),
        Answer::text("100"),
        Answer::text("Withdraw"),
        Answer::text("25"),
        Answer::text("Transaction History"),
        Answer::text("Logout"),
        Answer::text("Exit"),
    ]);

    let (_, output) = run_session(script);

    assert!(output.contains("No transactions yet."));
    assert!(output.contains("type,amount\ndeposit,100\nwithdrawal,25\n"));
}

#[test]
fn test_logout_returns_to_main_menu() {
    let mut script = create_account("alice", "secret", "100");
    script.extend(login("alice", "secret"));
    script.push(Answer::text("Logout"));
    // Back on the main menu, a second account can be created
    script.extend(create_account("bob", "hunter2", "5"));
    script.push(Answer::text("Exit"));

    let (bank, output) = run_session(script);

    assert!(output.contains("Logged out."));
    assert_eq!(bank.accounts().len(), 2);
    assert!(output.contains("Thank you for using MyBank Console App!"));
}

#[test]
fn test_exhausted_input_ends_cleanly() {
    // Script stops mid create-account flow
    let script = vec![
        Answer::text("Create Account"),
        Answer::text("alice"),
        Answer::password("secret"),
    ];

    let (bank, output) = run_session(script);

    assert!(bank.accounts().is_empty());
    assert!(output.starts_with("Welcome to MyBank Console App!"));
    assert!(!output.contains("Account created successfully!"));
}

#[test]
fn test_session_survives_rejected_operations() {
    let mut script = create_account("alice", "secret", "30");
    script.extend(login("alice", "secret"));
    script.extend([
        Answer::text("Withdraw"),
        Answer::text("100"),
        Answer::text("Deposit"),
        Answer::text("20"),
        Answer::text("Check Balance"),
        Answer::text("Logout"),
        Answer::text("Exit"),
    ]);

    let (bank, output) = run_session(script);

    assert!(output.contains("Insufficient funds."));
    assert!(output.contains("Deposit of $20 successful."));
    assert!(output.contains("Current balance: $50"));
    assert_eq!(bank.accounts()[0].balance(), amount("50"));
}
