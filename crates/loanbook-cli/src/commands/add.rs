//! Add entry command handler: the loan form.

use loanbook_core::{add_entry, LedgerStore, LoanbookError, NewLoan};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::constants::MISSING_FIELDS;
use crate::helpers::{parse_date_or, today};
use crate::ui::prompt::{print_step, prompt_text, prompt_with_default};
use crate::ui::{badge, format_date, header_with_context, print, receipt, Badge};

/// Form values as collected, before any validation.
struct FormInput {
    student: String,
    book: String,
    borrowed: Option<String>,
    returned: Option<String>,
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let interactive = ui_ctx.is_interactive() && !args.no_input;

    let input = if interactive && (args.student.is_none() || args.book.is_none()) {
        print(&ui_ctx, &header_with_context(&ui_ctx, "add", None, None));
        collect_interactive(ctx, args)?
    } else {
        FormInput {
            student: args.student.clone().unwrap_or_default(),
            book: args.book.clone().unwrap_or_default(),
            borrowed: args.borrowed.clone(),
            returned: args.returned.clone(),
        }
    };

    let loan = build_loan(input)?;

    let store = ctx.store()?;
    let ledger = store.load()?;
    let ledger = add_entry(&store, &ledger, loan)?;
    debug!(path = %store.path().display(), rows = ledger.len(), "Entry saved");

    if !ctx.quiet() {
        if let Some(record) = ledger.last() {
            let borrowed = format_date(&record.date_borrowed);
            let returned = format_date(&record.date_returned);
            let rows = ledger.len().to_string();
            let items = [
                ("Student", record.student_name.as_str()),
                ("Book", record.book_name.as_str()),
                ("Borrowed", borrowed.as_str()),
                ("Returned", returned.as_str()),
                ("Rows", rows.as_str()),
            ];
            print(&ui_ctx, &receipt(&ui_ctx, "Entry added successfully!", &items));
            if record.date_returned < record.date_borrowed {
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Warn, "Date Returned is before Date Borrowed"),
                );
            }
        }
    }

    Ok(())
}

/// Prompt for whatever the flags left out.
fn collect_interactive(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<FormInput> {
    let ui_ctx = ctx.ui_context(false, None);
    let today = format_date(&today());

    print_step(&ui_ctx, 1, 4, "Student Name");
    let student = match args.student {
        Some(ref value) => value.clone(),
        None => prompt_text("Student Name")?,
    };

    print_step(&ui_ctx, 2, 4, "Book Name");
    let book = match args.book {
        Some(ref value) => value.clone(),
        None => prompt_text("Book Name")?,
    };

    // Bail before asking for dates when the form can no longer succeed.
    ensure_required(&student, &book)?;

    print_step(&ui_ctx, 3, 4, "Date Borrowed");
    let borrowed = match args.borrowed {
        Some(ref value) => value.clone(),
        None => prompt_with_default("Date Borrowed", &today)?,
    };

    print_step(&ui_ctx, 4, 4, "Date Returned");
    let returned = match args.returned {
        Some(ref value) => value.clone(),
        None => prompt_with_default("Date Returned", &today)?,
    };

    Ok(FormInput {
        student,
        book,
        borrowed: Some(borrowed),
        returned: Some(returned),
    })
}

fn ensure_required(student: &str, book: &str) -> anyhow::Result<()> {
    if student.trim().is_empty() || book.trim().is_empty() {
        return Err(LoanbookError::Validation(MISSING_FIELDS.to_string()).into());
    }
    Ok(())
}

/// Turn raw form input into a validated loan. Dates default to today.
fn build_loan(input: FormInput) -> anyhow::Result<NewLoan> {
    ensure_required(&input.student, &input.book)?;

    let borrowed = parse_date_or(input.borrowed.as_deref(), today())?;
    let returned = parse_date_or(input.returned.as_deref(), today())?;

    let loan = NewLoan::new(input.student, input.book, borrowed).with_returned(returned);
    loan.validate()?;
    Ok(loan)
}
