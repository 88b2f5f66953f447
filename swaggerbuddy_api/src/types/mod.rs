mod envelope;
pub use self::envelope::BackendResponse;

mod project;
pub use self::project::{Project, ProjectID, ProjectSummary, Section, SectionID};

mod endpoint;
pub use self::endpoint::{
    Body, CodeExample, Endpoint, EndpointID, Header, ParameterKind, ParameterRow, PathParameter,
    QueryParameter,
};

mod request;
pub use self::request::{CreateProjectRequest, SwaggerFile};
