use iced::font;
use iced::Font;
use iced::{widget, Task};
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use std::collections::BTreeMap;
use std::path::PathBuf;

use sched_client::client::ScheduleClient;
use sched_client::form::{Field, ProcessForm};
use sched_client::input_file;
use sched_client::process::{ProcessRecord, ScheduleRequest, ScheduleResponse};
use sched_client::report::{GanttSlot, Report, Section};
use sched_client::submission::{self, Submissions, Ticket};
use sched_client::{config::Config, error::Error};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

fn main() -> iced::Result {
    env_logger::init();

    let config = Config::load();
    iced::application(Scheduler::title, Scheduler::update, Scheduler::view)
        .run_with(move || Scheduler::new(config))
}

struct Scheduler {
    config: Config,
    client: ScheduleClient,
    form: ProcessForm,
    submissions: Submissions,
    output: String,
    report: Report,
    gantt_charts: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
enum Message {
    AddProcess,
    RemoveProcess(usize),
    ClearProcesses,
    FieldChanged(usize, Field, String),
    Submit,
    Scheduled(Ticket, Result<ScheduleResponse, Error>),
    OpenFile,
    FilePicked(Result<PathBuf, Error>),
    FileLoaded(Result<Vec<ProcessRecord>, Error>),
    SaveProcesses,
    SaveOutput,
    Saved(Result<PathBuf, Error>),
    DialogResult(rfd::MessageDialogResult),
}

impl Scheduler {
    fn new(config: Config) -> (Self, Task<Message>) {
        let client = ScheduleClient::from_config(&config);
        log::info!("scheduling requests go to {}", client.url());

        (
            Self {
                config,
                client,
                form: ProcessForm::new(),
                submissions: Submissions::new(),
                output: String::new(),
                report: Report::default(),
                gantt_charts: BTreeMap::new(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.config.window_title.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddProcess => {
                self.form.add_row();
                Task::none()
            }
            Message::RemoveProcess(index) => {
                self.form.remove_row(index);
                Task::none()
            }
            Message::ClearProcesses => {
                self.form.clear();
                Task::none()
            }
            Message::FieldChanged(index, field, value) => {
                self.form.set_field(index, field, value);
                Task::none()
            }
            Message::Submit => {
                // An invalid form is never sent, and any request still running loses the output
                if let Err(error) = self.form.validate() {
                    log::warn!("not submitting: {}", error);
                    self.submissions.supersede();
                    self.show_output(submission::error_text(&error), None);
                    return Task::none();
                }

                let ticket = self.submissions.begin();
                let request = ScheduleRequest {
                    processes: self.form.records(),
                };
                let client = self.client.clone();

                Task::perform(
                    async move { client.schedule(request).await },
                    move |outcome| Message::Scheduled(ticket, outcome),
                )
            }
            Message::Scheduled(ticket, outcome) => {
                if !self.submissions.finish(ticket) {
                    log::debug!("dropping response of superseded request {:?}", ticket);
                    return Task::none();
                }

                let output = submission::render(&outcome);
                self.show_output(output, outcome.ok());
                Task::none()
            }
            Message::OpenFile => Task::perform(pick_file(), Message::FilePicked),
            Message::FilePicked(Ok(path)) => Task::perform(read_input_file(path), Message::FileLoaded),
            Message::FileLoaded(Ok(records)) => {
                log::info!("loaded {} process(es) from file", records.len());
                for record in records {
                    self.form.push_row(record.into());
                }
                Task::none()
            }
            Message::SaveProcesses => {
                let contents = input_file::to_input_text(&self.form.records());
                Task::perform(save_file("input.txt", contents), Message::Saved)
            }
            Message::SaveOutput => {
                if self.output.is_empty() {
                    return error_dialog(Error::NoOutput);
                }
                Task::perform(save_file("output.txt", self.output.clone()), Message::Saved)
            }
            Message::Saved(Ok(path)) => {
                log::info!("saved {}", path.display());
                Task::none()
            }
            Message::FilePicked(Err(Error::DialogClosed)) | Message::Saved(Err(Error::DialogClosed)) => {
                Task::none()
            }
            Message::FilePicked(Err(error))
            | Message::FileLoaded(Err(error))
            | Message::Saved(Err(error)) => error_dialog(error),
            Message::DialogResult(_result) => Task::none(),
        }
    }

    fn show_output(&mut self, output: String, response: Option<ScheduleResponse>) {
        match response {
            Some(response) => {
                self.report = Report::parse(&response.result);
                self.gantt_charts = response.gantt_charts;
            }
            None => {
                self.report = Report::default();
                self.gantt_charts.clear();
            }
        }
        self.output = output;
    }

    fn view(&self) -> iced::Element<'_, Message> {
        let menu_bar = row![
            button("Open").on_press(Message::OpenFile),
            button("Save processes").on_press(Message::SaveProcesses),
            button("Save output").on_press(Message::SaveOutput),
            widget::Space::new(iced::Length::Fill, iced::Length::Shrink),
        ]
        .spacing(5)
        .height(40)
        .padding([5, 10]);

        let mut processes = column![].spacing(5).padding([5, 10]);
        for (index, process) in self.form.rows().iter().enumerate() {
            let mut inputs = row![text(index + 1).font(BOLD).width(30)].spacing(5);
            for field in Field::ALL {
                inputs = inputs.push(
                    text_input(field.placeholder(), process.get(field))
                        .on_input(move |value| Message::FieldChanged(index, field, value))
                        .on_submit(Message::Submit)
                        .width(110),
                );
            }
            inputs = inputs.push(
                button("x")
                    .style(button::danger)
                    .on_press(Message::RemoveProcess(index)),
            );
            processes = processes.push(inputs);
        }

        let controls = row![
            button("Add process").on_press(Message::AddProcess),
            button("Clear").on_press(Message::ClearProcesses),
            button("Schedule").on_press(Message::Submit),
        ]
        .spacing(10)
        .padding([5, 10]);

        let processes_display = container(column![
            scrollable(processes).height(iced::Length::Fill),
            controls
        ])
        .height(iced::Length::Fill)
        .width(460)
        .style(container::rounded_box);

        let mut output = column![].spacing(10).padding([5, 10]);
        if self.submissions.is_pending() {
            output = output.push(text("Scheduling...").font(BOLD));
        }
        output = output.push(text(&self.output).font(Font::MONOSPACE));
        output = output.push(self.summary());

        let output_display = container(scrollable(output).width(iced::Length::Fill))
            .height(iced::Length::Fill)
            .width(iced::Length::Fill)
            .style(container::rounded_box);

        widget::container(column![
            menu_bar,
            row![processes_display, output_display]
                .spacing(40)
                .padding([10, 10])
        ])
        .center_x(iced::Length::Fill)
        .center_y(iced::Length::Fill)
        .width(iced::Length::Fill)
        .height(iced::Length::Fill)
        .into()
    }

    fn summary(&self) -> iced::Element<'_, Message> {
        let mut summary = column![].spacing(5);
        if self.report.is_empty() && self.gantt_charts.is_empty() {
            return summary.into();
        }

        if let Some(best) = &self.report.best {
            summary = summary.push(text(format!("Recommended: {}", best)).font(BOLD));
        }
        for section in &self.report.sections {
            summary = summary.push(section_view(section));
        }
        if !self.gantt_charts.is_empty() {
            summary = summary.push(text("Gantt charts").font(BOLD));
            for (algorithm, path) in &self.gantt_charts {
                summary = summary.push(text(format!("{}: {}", algorithm, path)));
            }
        }

        summary.into()
    }
}

fn section_view(section: &Section) -> iced::Element<'_, Message> {
    let mut averages = vec![];
    if let Some(quantum) = section.quantum {
        averages.push(format!("quantum {}", quantum));
    }
    if let Some(waiting) = section.average_waiting {
        averages.push(format!("avg waiting {:.2}", waiting));
    }
    if let Some(turnaround) = section.average_turnaround {
        averages.push(format!("avg turnaround {:.2}", turnaround));
    }

    let gantt = section
        .gantt
        .iter()
        .map(slot_label)
        .collect::<Vec<String>>()
        .join("  ");

    column![
        text(&section.title).font(BOLD),
        text(averages.join(", ")),
        text(gantt).font(Font::MONOSPACE),
    ]
    .into()
}

fn slot_label(slot: &GanttSlot) -> String {
    match &slot.task {
        Some(task) => format!("{} [{}-{}]", task, slot.start, slot.end),
        None => format!("idle [{}-{}]", slot.start, slot.end),
    }
}

fn error_dialog(error: Error) -> Task<Message> {
    log::error!("{}", error);
    let dialog = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Error")
        .set_description(format!("{}", error))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();

    Task::perform(dialog, Message::DialogResult)
}

async fn read_input_file(path: PathBuf) -> Result<Vec<ProcessRecord>, Error> {
    path.file_name().ok_or(Error::NotFile)?;

    let contents = tokio::fs::read(&path)
        .await
        .map_err(|error| error.kind())
        .map_err(Error::IO)?;

    input_file::read_file(&contents)
}

async fn pick_file() -> Result<PathBuf, Error> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Choose a process file...")
        .add_filter("Process list", &["txt"])
        .pick_file()
        .await
        .ok_or(Error::DialogClosed)?;

    Ok(handle.path().to_owned())
}

async fn save_file(file_name: &'static str, contents: String) -> Result<PathBuf, Error> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Save as...")
        .set_file_name(file_name)
        .save_file()
        .await
        .ok_or(Error::DialogClosed)?;
    let path = handle.path().to_owned();

    tokio::fs::write(&path, contents)
        .await
        .map_err(|error| error.kind())
        .map_err(Error::IO)?;

    Ok(path)
}
