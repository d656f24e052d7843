use gloo_net::http::Request;
use liftbook_domain as domain;

use crate::model;

pub struct REST;

impl domain::WorkoutLogRepository for REST {
    async fn read_workout_logs(&self) -> Result<Vec<domain::WorkoutLog>, domain::ReadError> {
        let logs = fetch::<Vec<model::WorkoutLog>>(get("api/workout_logs")?).await?;
        Ok(model::workout_logs(logs))
    }
}

impl domain::TemplateRepository for REST {
    async fn create_template(
        &self,
        template: domain::Template,
    ) -> Result<domain::Template, domain::CreateError> {
        let request = Request::post("api/templates")
            .json(&model::Template::from(&template))
            .map_err(|err| domain::CreateError::Other(err.into()))?;
        let created = fetch::<model::Template>(request).await?;
        Ok(created.into())
    }
}

impl domain::ProgramRepository for REST {
    async fn read_programs(&self) -> Result<Vec<domain::Program>, domain::ReadError> {
        let programs = fetch::<Vec<model::Program>>(get("api/programs")?).await?;
        Ok(programs.into_iter().map(domain::Program::from).collect())
    }
}

fn get(url: &str) -> Result<Request, domain::StorageError> {
    Request::get(url)
        .build()
        .map_err(|err| domain::StorageError::Other(err.into()))
}

async fn fetch<T>(request: Request) -> Result<T, domain::StorageError>
where
    T: 'static + for<'de> serde::Deserialize<'de>,
{
    match request.send().await {
        Ok(response) => {
            if response.ok() {
                response.json::<T>().await.map_err(|err| {
                    domain::StorageError::Other(format!("deserialization failed: {err}").into())
                })
            } else {
                Err(domain::StorageError::Other(
                    format!("{} {}", response.status(), response.status_text()).into(),
                ))
            }
        }
        Err(_) => Err(domain::StorageError::NoConnection),
    }
}
