mod project_record;
